//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the lander physics, the round lifecycle and the
//! fixed-timestep driver. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same pad sequence
//! - **Testable**: Every physics rule is reachable from plain unit tests
//! - **Portable**: Can run in any host (terminal, GUI, headless)
//! - **Fast**: The tick path does not allocate
//!
//! # Module Structure
//!
//! - [`lander`]: Arena, lander body and landing pad geometry
//! - [`game_state`]: Round state: thrust flags, per-tick physics, outcome, reset
//! - [`landing`]: Touchdown classification (safe vs crash)
//! - [`rng`]: Seeded pad placement
//! - [`snapshot`]: Render-facing copy of the state
//! - [`game_loop`]: Fixed-timestep scheduler that stops on touchdown
//!
//! # Rules
//!
//! - **Gravity**: `vy += 0.005` every tick
//! - **Thrust**: up `vy -= 0.02`, left/right `vx ∓ 0.01`, each burning 0.1 fuel
//! - **Touchdown**: first tick with the lander's bottom edge at or below the floor
//! - **Safe**: lander fully over the pad and `|vy| <= 1`, otherwise a crash
//!
//! # Example
//!
//! ```
//! use tui_lander_core::{GameLoop, GameState};
//! use tui_lander_types::{GameAction, ThrustDirection};
//!
//! let mut game = GameLoop::new(GameState::new(12345));
//!
//! // Hold the main engine for a second of game time.
//! game.apply_action(GameAction::StartThrust(ThrustDirection::Up));
//! for _ in 0..50 {
//!     game.advance(20);
//! }
//! assert_eq!(game.state().tick_count(), 50);
//! assert!(game.state().lander().vy < 0.0);
//!
//! // Let go and fall to the floor.
//! game.apply_action(GameAction::StopThrust(ThrustDirection::Up));
//! while game.is_running() {
//!     game.step();
//! }
//! assert!(game.state().outcome().is_some());
//! ```

pub mod game_loop;
pub mod game_state;
pub mod lander;
pub mod landing;
pub mod rng;
pub mod snapshot;

pub use tui_lander_types as types;

// Re-export commonly used types for convenience
pub use game_loop::{GameLoop, MAX_TICKS_PER_ADVANCE};
pub use game_state::GameState;
pub use lander::{Arena, Lander, Pad};
pub use landing::{classify_landing, LandingReport};
pub use rng::PadRng;
pub use snapshot::GameSnapshot;
