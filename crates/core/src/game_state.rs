//! Game state module - manages the complete round state
//!
//! This module ties together the lander, the pad, the thrust flags and the
//! round outcome. It owns the per-tick physics step and the round lifecycle.

use crate::landing::{classify_landing, LandingReport};
use crate::lander::{Arena, Lander, Pad};
use crate::rng::PadRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete state of one lander session (the current round plus counters)
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Arena,
    lander: Lander,
    pad: Pad,
    thrust: ThrustFlags,
    /// Set exactly once per round, at ground contact.
    outcome: Option<Outcome>,
    last_landing: Option<LandingReport>,
    rng: PadRng,
    /// Monotonic round id (increments on reset).
    episode_id: u32,
    /// Physics ticks run in the current round.
    tick_count: u32,
}

impl GameState {
    /// Create a session in the default 500x500 arena and start its first round
    pub fn new(seed: u64) -> Self {
        Self::with_arena(Arena::default(), seed)
    }

    pub fn with_arena(arena: Arena, seed: u64) -> Self {
        let mut state = Self {
            arena,
            lander: Lander::spawn(),
            pad: Pad::new(PAD_MARGIN),
            thrust: ThrustFlags::default(),
            outcome: None,
            last_landing: None,
            rng: PadRng::new(seed),
            episode_id: 0,
            tick_count: 0,
        };
        state.begin_round();
        state
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn lander(&self) -> &Lander {
        &self.lander
    }

    pub fn pad(&self) -> Pad {
        self.pad
    }

    pub fn thrust(&self) -> ThrustFlags {
        self.thrust
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Details of the touchdown that ended the current round, if any.
    pub fn last_landing(&self) -> Option<LandingReport> {
        self.last_landing
    }

    pub fn flying(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Replace the lander (scenario setup, tools).
    pub fn set_lander(&mut self, lander: Lander) {
        self.lander = lander;
    }

    /// Move the pad (scenario setup, tools).
    pub fn set_pad(&mut self, pad: Pad) {
        self.pad = pad;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.arena = self.arena;
        out.lander = self.lander;
        out.pad = self.pad;
        out.thrust = self.thrust;
        out.outcome = self.outcome;
        out.episode_id = self.episode_id;
        out.tick_count = self.tick_count;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start a fresh round: new pad, lander back at spawn, flags and outcome cleared
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.begin_round();
    }

    fn begin_round(&mut self) {
        self.pad = Pad::new(self.rng.next_pad_x(&self.arena));
        self.lander = Lander::spawn();
        self.thrust.clear();
        self.outcome = None;
        self.last_landing = None;
        self.tick_count = 0;

        log::info!(
            "round {} started: pad at x={} (seed {})",
            self.episode_id,
            self.pad.x,
            self.rng.seed()
        );
    }

    /// Set or clear one thrust flag. Returns whether the flag changed.
    ///
    /// Callable at any time; after the round ends the flag is inert because
    /// no further ticks run.
    pub fn set_thrust(&mut self, direction: ThrustDirection, active: bool) -> bool {
        if self.thrust.get(direction) == active {
            return false;
        }
        self.thrust.set(direction, active);
        true
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Returns the outcome when this tick brought the lander to the floor.
    /// Finished rounds are frozen: calling this after touchdown does nothing.
    pub fn tick(&mut self) -> Option<Outcome> {
        if self.outcome.is_some() {
            return None;
        }

        self.tick_count = self.tick_count.wrapping_add(1);

        // Fuel is checked once; every active flag then burns its share, so the
        // last thrusting tick may overdraw the tank by up to three burns.
        if self.lander.has_fuel() {
            for direction in ThrustDirection::ALL {
                if self.thrust.get(direction) {
                    let (dvx, dvy) = direction.acceleration();
                    self.lander.vx += dvx;
                    self.lander.vy += dvy;
                    self.lander.fuel -= FUEL_PER_THRUST;
                }
            }

            if !self.lander.has_fuel() {
                log::info!(
                    "round {}: fuel exhausted at tick {}",
                    self.episode_id,
                    self.tick_count
                );
            }
        }

        self.lander.vy += GRAVITY;

        self.lander.x += self.lander.vx;
        self.lander.y += self.lander.vy;

        if self.lander.bottom() >= self.arena.height {
            return Some(self.resolve_landing());
        }

        None
    }

    /// Judge the touchdown and freeze the round.
    ///
    /// Runs at most once per round: once an outcome is recorded, later calls
    /// return it unchanged.
    pub fn resolve_landing(&mut self) -> Outcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let report = classify_landing(&self.lander, &self.pad);
        self.outcome = Some(report.outcome);
        self.last_landing = Some(report);

        log::info!(
            "round {} ended: {} (speed {:.3}, on pad: {}, ticks {})",
            self.episode_id,
            report.outcome.as_str(),
            report.speed,
            report.on_pad,
            self.tick_count
        );

        report.outcome
    }

    /// Apply a game action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::StartThrust(direction) => self.set_thrust(direction, true),
            GameAction::StopThrust(direction) => self.set_thrust(direction, false),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
