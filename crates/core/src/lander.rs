//! Arena geometry: the playfield, the lander body and the landing pad.
//!
//! Coordinates follow screen convention: origin at the top-left, x grows to
//! the right and y grows downward. The floor is the line `y = arena.height`.

use crate::types::{
    ARENA_HEIGHT, ARENA_WIDTH, INITIAL_FUEL, LANDER_SIZE, LANDER_SPAWN_X, LANDER_SPAWN_Y,
    PAD_HALF_THICKNESS, PAD_MARGIN, PAD_WIDTH,
};

/// Logical playfield dimensions, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive integer range the pad's left edge is drawn from.
    ///
    /// The pad keeps `PAD_MARGIN` from the left wall and never crosses the
    /// right wall. The upper bound is `width - PAD_WIDTH` rather than
    /// `width - PAD_MARGIN`: a 100-wide pad starting at 450 would end at 550
    /// in a 500-wide arena. At the default size this gives `[50, 400]`.
    /// Arenas too narrow for that collapse to the lower bound.
    pub fn pad_x_range(&self) -> (i64, i64) {
        let lo = PAD_MARGIN as i64;
        let hi = (self.width - PAD_WIDTH).min(self.width - PAD_MARGIN).floor() as i64;
        (lo, hi.max(lo))
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

/// The lander: a 40x40 square with velocity and a fuel tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lander {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub fuel: f64,
}

impl Lander {
    /// Lander at rest in its spawn rectangle with a full tank
    pub fn spawn() -> Self {
        Self {
            x: LANDER_SPAWN_X,
            y: LANDER_SPAWN_Y,
            vx: 0.0,
            vy: 0.0,
            fuel: INITIAL_FUEL,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + LANDER_SIZE
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + LANDER_SIZE
    }

    /// Vertical speed, the only speed that matters for landing.
    pub fn speed(&self) -> f64 {
        self.vy.abs()
    }

    /// Whether thrust can fire this tick.
    pub fn has_fuel(&self) -> bool {
        self.fuel > 0.0
    }

    /// Fuel as shown to the player (never negative).
    pub fn fuel_gauge(&self) -> f64 {
        self.fuel.max(0.0)
    }

    /// Distance between the lander's bottom edge and the floor.
    pub fn altitude(&self, arena: &Arena) -> f64 {
        arena.height - self.bottom()
    }
}

impl Default for Lander {
    fn default() -> Self {
        Self::spawn()
    }
}

/// The landing target: a horizontal interval `[x, x + PAD_WIDTH]` on the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pad {
    pub x: f64,
}

impl Pad {
    pub fn new(x: f64) -> Self {
        Self { x }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + PAD_WIDTH
    }

    /// Top of the drawn pad rectangle
    pub fn top(&self, arena: &Arena) -> f64 {
        arena.height - PAD_HALF_THICKNESS
    }

    /// Bottom of the drawn pad rectangle (below the visible floor)
    pub fn bottom(&self, arena: &Arena) -> f64 {
        arena.height + PAD_HALF_THICKNESS
    }

    /// Whether `[left, right]` lies entirely on the pad (both bounds inclusive).
    pub fn contains_span(&self, left: f64, right: f64) -> bool {
        self.left() <= left && right <= self.right()
    }
}
