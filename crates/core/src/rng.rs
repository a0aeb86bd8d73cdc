//! RNG module - landing pad placement
//!
//! Each round draws one pad position. The generator is seeded explicitly so
//! the same seed always yields the same sequence of pads (tests, benches,
//! reproducible sessions).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::lander::Arena;

/// Seeded generator for pad positions
#[derive(Debug, Clone)]
pub struct PadRng {
    rng: StdRng,
    seed: u64,
}

impl PadRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the pad's left edge, uniformly over the whole units in
    /// [`Arena::pad_x_range`].
    pub fn next_pad_x(&mut self, arena: &Arena) -> f64 {
        let (lo, hi) = arena.pad_x_range();
        self.rng.gen_range(lo..=hi) as f64
    }
}
