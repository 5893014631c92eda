//! Rendering metadata provider
//!
//! The engine never renders. A renderer injects a [`DisplayTokens`] provider that
//! maps a piece kind and rotation state to whatever it draws with (a letter, a
//! color, a sprite handle) and reads the board through it.

use crate::board::Board;
use crate::shapes::{shape, Rgb};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

pub trait DisplayTokens {
    type Token: Copy;

    fn token(&self, kind: PieceKind, rotation: u8) -> Self::Token;
}

/// Uppercase kind letter, rotation ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterTokens;

impl DisplayTokens for LetterTokens {
    type Token = char;

    fn token(&self, kind: PieceKind, _rotation: u8) -> char {
        kind.letter()
    }
}

/// Catalog color, rotation ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTokens;

impl DisplayTokens for ColorTokens {
    type Token = Rgb;

    fn token(&self, kind: PieceKind, _rotation: u8) -> Rgb {
        shape(kind).color
    }
}

pub fn cell_token<D: DisplayTokens>(cell: Cell, tokens: &D) -> Option<D::Token> {
    match cell {
        Cell::Empty => None,
        Cell::Occupied { kind, rotation } => Some(tokens.token(kind, rotation)),
    }
}

/// Map every board cell through `tokens`
pub fn board_tokens<D: DisplayTokens>(
    board: &Board,
    tokens: &D,
) -> [[Option<D::Token>; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
    std::array::from_fn(|y| {
        std::array::from_fn(|x| {
            board
                .get(x as i8, y as i8)
                .and_then(|cell| cell_token(cell, tokens))
        })
    })
}

/// Text rendering of the board, one line per row, `.` for empty cells
pub fn board_to_text(board: &Board) -> String {
    let mut out = String::with_capacity((BOARD_WIDTH as usize + 1) * BOARD_HEIGHT as usize);
    for row in board_tokens(board, &LetterTokens) {
        out.extend(row.iter().map(|t| t.unwrap_or('.')));
        out.push('\n');
    }
    out
}
