//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key
//! events onto [`crate::types::GameAction`]s and tracks held thrust keys,
//! including on terminals without key-release events.

pub mod handler;
pub mod map;

pub use tui_lander_types as types;

pub use handler::InputHandler;
pub use map::{is_restart_key, should_quit, thrust_for_key};
