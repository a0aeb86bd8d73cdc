//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input mapping, terminal rendering).
//!
//! # Arena Geometry
//!
//! The simulation runs in a fixed logical arena (origin top-left, y grows down):
//!
//! - **Size**: 500 x 500 units
//! - **Lander**: 40 x 40 square, spawning with its top-left corner at (230, 50)
//! - **Pad**: 100 units wide, straddling the floor line (`H - 10 .. H + 10`)
//!
//! # Physics Constants
//!
//! All values are per-tick deltas (the tick interval is implicitly 1):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.005 | Added to `vy` every tick |
//! | `THRUST_UP` | 0.02 | Subtracted from `vy` while up-thrust is held |
//! | `THRUST_SIDE` | 0.01 | Added to / subtracted from `vx` by side thrust |
//! | `FUEL_PER_THRUST` | 0.1 | Fuel burned per active thrust flag per tick |
//! | `INITIAL_FUEL` | 100 | Fuel at the start of a round |
//! | `SAFE_LANDING_SPEED` | 1.0 | Max vertical speed for a safe landing |
//!
//! # Timing
//!
//! - `TICK_MS`: 20ms fixed timestep (50 ticks per second)
//! - `DEFAULT_KEY_HOLD_DELAY_MS`: 700ms grace after a key goes down, covering
//!   the OS delay before the first auto-repeat
//! - `DEFAULT_KEY_RELEASE_TIMEOUT_MS`: 150ms auto-release between repeats for
//!   terminals that never report key release
//!
//! # Examples
//!
//! ```
//! use tui_lander_types::{Outcome, ThrustDirection, ThrustFlags, CRASH_MESSAGE};
//!
//! let mut flags = ThrustFlags::default();
//! flags.set(ThrustDirection::Up, true);
//! assert!(flags.up);
//! assert_eq!(flags.active_count(), 1);
//!
//! let (dvx, dvy) = ThrustDirection::Left.acceleration();
//! assert!(dvx < 0.0 && dvy == 0.0);
//!
//! assert_eq!(Outcome::Crash.message(), CRASH_MESSAGE);
//! ```

/// Arena width in logical units
pub const ARENA_WIDTH: f64 = 500.0;

/// Arena height in logical units
pub const ARENA_HEIGHT: f64 = 500.0;

/// Lander side length (the lander is a square)
pub const LANDER_SIZE: f64 = 40.0;

/// Spawn position of the lander's top-left corner
pub const LANDER_SPAWN_X: f64 = 230.0;
pub const LANDER_SPAWN_Y: f64 = 50.0;

/// Landing pad width
pub const PAD_WIDTH: f64 = 100.0;

/// Half the drawn pad thickness; the pad spans `H - 10 .. H + 10`.
pub const PAD_HALF_THICKNESS: f64 = 10.0;

/// Minimum distance between the pad's left edge and either arena wall.
pub const PAD_MARGIN: f64 = 50.0;

/// Downward acceleration applied every tick
pub const GRAVITY: f64 = 0.005;

/// Upward acceleration of the main engine
pub const THRUST_UP: f64 = 0.02;

/// Horizontal acceleration of each side thruster
pub const THRUST_SIDE: f64 = 0.01;

/// Fuel burned per active thrust flag per tick
pub const FUEL_PER_THRUST: f64 = 0.1;

/// Fuel at the start of each round
pub const INITIAL_FUEL: f64 = 100.0;

/// Maximum |vy| at ground contact for a safe landing (inclusive)
pub const SAFE_LANDING_SPEED: f64 = 1.0;

/// Fixed timestep interval in milliseconds (20ms = 50 ticks per second)
pub const TICK_MS: u32 = 20;

/// Grace period after a key goes down before it can be auto-released.
///
/// Operating systems wait 250-660ms before the first auto-repeat, so a fresh
/// press must outlive that gap.
pub const DEFAULT_KEY_HOLD_DELAY_MS: u32 = 700;

/// Auto-release delay between repeats when the terminal emits no release events.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Message shown after a safe landing
pub const SAFE_MESSAGE: &str = "Safe Landing!";

/// Message shown after a crash
pub const CRASH_MESSAGE: &str = "You crashed!";

/// A thruster direction
///
/// - **Up**: main engine, pushes the lander up (reduces `vy`)
/// - **Left**: pushes the lander left (reduces `vx`)
/// - **Right**: pushes the lander right (increases `vx`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrustDirection {
    Up,
    Left,
    Right,
}

impl ThrustDirection {
    /// All directions, in the order thrust is applied within a tick.
    pub const ALL: [ThrustDirection; 3] = [
        ThrustDirection::Up,
        ThrustDirection::Left,
        ThrustDirection::Right,
    ];

    /// Velocity change `(dvx, dvy)` produced by one tick of this thruster.
    pub fn acceleration(&self) -> (f64, f64) {
        match self {
            ThrustDirection::Up => (0.0, -THRUST_UP),
            ThrustDirection::Left => (-THRUST_SIDE, 0.0),
            ThrustDirection::Right => (THRUST_SIDE, 0.0),
        }
    }

    /// Stable index into per-direction arrays.
    pub fn index(&self) -> usize {
        match self {
            ThrustDirection::Up => 0,
            ThrustDirection::Left => 1,
            ThrustDirection::Right => 2,
        }
    }
}

/// The three independent thrust flags, one per held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ThrustFlags {
    pub up: bool,
    pub left: bool,
    pub right: bool,
}

impl ThrustFlags {
    pub fn get(&self, direction: ThrustDirection) -> bool {
        match direction {
            ThrustDirection::Up => self.up,
            ThrustDirection::Left => self.left,
            ThrustDirection::Right => self.right,
        }
    }

    /// Set one flag. Re-asserting the current value is a no-op.
    pub fn set(&mut self, direction: ThrustDirection, active: bool) {
        match direction {
            ThrustDirection::Up => self.up = active,
            ThrustDirection::Left => self.left = active,
            ThrustDirection::Right => self.right = active,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.left || self.right
    }

    pub fn active_count(&self) -> u32 {
        self.up as u32 + self.left as u32 + self.right as u32
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Game actions that can be applied to modify game state
///
/// These are the only inputs the simulation accepts; key bindings are mapped
/// onto them by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// A thrust key went down
    StartThrust(ThrustDirection),
    /// A thrust key went up
    StopThrust(ThrustDirection),
    /// Start a fresh round (at any time)
    Restart,
}

/// Terminal classification of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Safe,
    Crash,
}

impl Outcome {
    /// Message displayed in the end-of-round overlay
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Safe => SAFE_MESSAGE,
            Outcome::Crash => CRASH_MESSAGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Safe => "safe",
            Outcome::Crash => "crash",
        }
    }
}
