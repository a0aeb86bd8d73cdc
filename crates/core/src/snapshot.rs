use crate::lander::{Arena, Lander, Pad};
use crate::types::{Outcome, ThrustFlags};

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub arena: Arena,
    pub lander: Lander,
    pub pad: Pad,
    pub thrust: ThrustFlags,
    pub outcome: Option<Outcome>,
    pub episode_id: u32,
    pub tick_count: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.arena = Arena::default();
        self.lander = Lander::spawn();
        self.pad = Pad::new(0.0);
        self.thrust = ThrustFlags::default();
        self.outcome = None;
        self.episode_id = 0;
        self.tick_count = 0;
        self.seed = 0;
    }

    pub fn flying(&self) -> bool {
        self.outcome.is_none()
    }

    /// Distance from the lander's bottom edge to the floor.
    pub fn altitude(&self) -> f64 {
        self.lander.altitude(&self.arena)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            arena: Arena::default(),
            lander: Lander::spawn(),
            pad: Pad::new(0.0),
            thrust: ThrustFlags::default(),
            outcome: None,
            episode_id: 0,
            tick_count: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
