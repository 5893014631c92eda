//! Piece module - a positioned, rotatable set of four cells
//!
//! Rotation is a plain 90° clockwise transform about the shape's local origin
//! followed by re-anchoring the bounding box at relative (0, 0). The piece stays
//! close to its pre-rotation footprint instead of spinning around a true center;
//! collisions are resolved by the caller with [`crate::types::WALL_KICKS`].

use crate::shapes::{shape, spawn_cells, CellOffset};
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// The active (or queued) falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    x: i8,
    y: i8,
    cells: [CellOffset; 4],
    /// Successful clockwise rotations, mod 4
    rotation: u8,
}

impl Piece {
    /// Create a piece at the spawn origin with its canonical shape
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece with its canonical shape at an arbitrary origin
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            cells: spawn_cells(kind),
            rotation: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Relative cell offsets for the current rotation state
    pub fn cells(&self) -> [CellOffset; 4] {
        self.cells
    }

    /// Rotation state (0..4)
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Move the origin; bounds are the caller's business.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Put the origin back at the spawn position, keeping the cells.
    pub fn reset_origin(&mut self) {
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
    }

    /// Rotate 90° clockwise and re-anchor at (0, 0). No-op for the square kind.
    pub fn rotate(&mut self) {
        if shape(self.kind).square {
            return;
        }

        let mut rotated = self.cells.map(|(dx, dy)| (dy, -dx));
        let min_x = rotated.iter().map(|c| c.0).min().unwrap_or(0);
        let min_y = rotated.iter().map(|c| c.1).min().unwrap_or(0);
        for cell in &mut rotated {
            cell.0 -= min_x;
            cell.1 -= min_y;
        }

        self.cells = rotated;
        self.rotation = (self.rotation + 1) % 4;
    }

    /// Absolute board coordinates of the four cells
    pub fn absolute_cells(&self) -> [(i8, i8); 4] {
        self.cells.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}
