//! Input dispatch (engine-facing).
//!
//! The engine only understands abstract [`types::Command`]s. This crate turns
//! the two kinds of physical input a driver has into them: `crossterm` key events
//! from a terminal, and line-oriented command scripts for replays.

pub mod map;
pub mod script;

pub use blockfall_types as types;

pub use map::{command_for_key, should_quit};
pub use script::{parse_command, parse_script, ScriptError};
