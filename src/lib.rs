//! TUI Lander (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_lander::{core,input,term,types}`
//! and hosts the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_lander_core as core;
pub use tui_lander_input as input;
pub use tui_lander_term as term;
pub use tui_lander_types as types;
