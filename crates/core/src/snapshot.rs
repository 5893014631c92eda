//! Read-only views of the game state for renderers and serialized output.

use serde::Serialize;

use crate::piece::Piece;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    /// Absolute board coordinates
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
            cells: value.absolute_cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameSnapshot {
    /// Kind codes, 0 = empty
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub started: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u64,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval: f64,
    pub fall_timer: f64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            started: false,
            game_over: false,
            episode_id: 0,
            seed: 0,
            score: 0,
            level: 0,
            lines: 0,
            fall_interval: 0.0,
            fall_timer: 0.0,
        }
    }
}
