//! Fixed-timestep driver for a [`GameState`].
//!
//! The host feeds wall-clock time in; the loop turns it into whole physics
//! ticks. A tick only runs after the previous one completed and left the
//! round flying, so at most one tick is ever "pending". When a tick ends the
//! round the loop stops scheduling until [`GameLoop::restart`].

use crate::game_state::GameState;
use crate::types::{GameAction, Outcome, TICK_MS};

/// Upper bound on ticks run by a single [`GameLoop::advance`] call.
///
/// After a long stall (suspended terminal, debugger) the backlog is dropped
/// instead of fast-forwarding the lander into the ground.
pub const MAX_TICKS_PER_ADVANCE: u32 = 8;

#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    tick_ms: u32,
    /// Wall time accumulated toward the next tick.
    pending_ms: u32,
    running: bool,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self::with_tick_ms(state, TICK_MS)
    }

    pub fn with_tick_ms(state: GameState, tick_ms: u32) -> Self {
        let running = state.flying();
        Self {
            state,
            tick_ms: tick_ms.max(1),
            pending_ms: 0,
            running,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Whether ticks are still being scheduled for the current round.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds the host may wait for input before the next tick is due.
    ///
    /// `None` once the round is over: nothing is scheduled until a restart.
    pub fn time_until_next_tick_ms(&self) -> Option<u32> {
        if !self.running {
            return None;
        }
        Some(self.tick_ms.saturating_sub(self.pending_ms))
    }

    /// Route an input action to the state. Restart also resumes the loop.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            _ => self.state.apply_action(action),
        }
    }

    /// Start a fresh round and resume ticking, even if the loop had stopped.
    pub fn restart(&mut self) {
        self.state.reset();
        self.pending_ms = 0;
        self.running = true;
        log::info!("restart: round {}", self.state.episode_id());
    }

    /// Feed elapsed wall time; run every tick that has come due.
    ///
    /// Returns the number of ticks run. Stops at the tick that ends the
    /// round and discards any leftover time.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);

        let mut ran = 0;
        while self.pending_ms >= self.tick_ms {
            if ran == MAX_TICKS_PER_ADVANCE {
                log::debug!("dropping {}ms of tick backlog", self.pending_ms);
                self.pending_ms = 0;
                break;
            }

            self.pending_ms -= self.tick_ms;
            ran += 1;

            if self.step().is_some() {
                break;
            }
        }

        ran
    }

    /// Run exactly one tick, regardless of accumulated time.
    ///
    /// Returns the outcome if this tick ended the round.
    pub fn step(&mut self) -> Option<Outcome> {
        if !self.running {
            return None;
        }

        let outcome = self.state.tick();
        if outcome.is_some() {
            self.running = false;
            self.pending_ms = 0;
        }
        outcome
    }
}
