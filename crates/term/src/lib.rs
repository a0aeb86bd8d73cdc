//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to a crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Scale the square arena to whatever the terminal offers
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_lander_core as core;
pub use tui_lander_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, ArenaLayout, GameView, Viewport, RESTART_HINT, TOO_SMALL};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
