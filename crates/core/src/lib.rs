//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game: the settled board, the
//! seven piece kinds, movement and rotation, locking, line clearing, scoring,
//! level progression and the automatic fall. It never reads input, renders or
//! sleeps; a driver feeds it [`types::Command`]s and reads its state back.
//!
//! - **Deterministic**: the same seed and command sequence produce the same game
//! - **Testable**: every rule is reachable without a terminal
//! - **Fast**: fixed-size storage, no allocation on the command path
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cells and row removal
//! - [`shapes`]: canonical cell offsets and colors of the seven kinds
//! - [`piece`]: a positioned piece with the clockwise rotation transform
//! - [`collision`]: bounds and overlap test
//! - [`lock`]: committing pieces and clearing completed rows
//! - [`scoring`]: points, levels and fall speed
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: spawn controller, commands and the fall timer
//! - [`events`], [`snapshot`], [`display`]: read-only views for drivers and renderers
//! - [`config`]: TOML-loadable rules
//!
//! # Game Rules
//!
//! - Pieces spawn with their bounding box at column 3, row 0
//! - Rotation is clockwise only; blocked rotations try the kicks
//!   (-1,0), (1,0), (-2,0), (2,0), (0,-1) in order and are undone if none fit
//! - Line clears score 100/300/500/800 times the level; soft drop +1 per cell,
//!   hard drop +2 per cell
//! - Every 10 lines raise the level (max 15); the fall interval is
//!   0.5s * 0.9^(level - 1)
//! - The game ends when a newly promoted piece overlaps the board
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::Command;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateClockwise);
//! game.apply(Command::HardDropToBottom);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] with the seconds elapsed since the previous call.
//! The piece descends at most one row per call, once the accumulated time
//! reaches the current fall interval.

pub mod board;
pub mod collision;
pub mod config;
pub mod display;
pub mod events;
pub mod game_state;
pub mod lock;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, drop_distance};
pub use config::{ConfigError, EngineConfig, Rules, CONFIG_ENV_VAR};
pub use display::{board_to_text, board_tokens, ColorTokens, DisplayTokens, LetterTokens};
pub use events::{EventLog, GameEvent};
pub use game_state::GameState;
pub use lock::{clear_rows, find_completed_rows, lock};
pub use piece::Piece;
pub use rng::PieceRandomizer;
pub use scoring::{LineClearResult, Progress};
pub use shapes::{shape, ShapeDef};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
