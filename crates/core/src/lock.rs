//! Locking and line clearing
//!
//! [`lock`] commits a piece into the board, [`find_completed_rows`] collects full
//! rows before anything moves, and [`clear_rows`] removes them bottom-up, backfills
//! empty rows at the top and credits the session progress.

use crate::board::{Board, RowList};
use crate::config::Rules;
use crate::piece::Piece;
use crate::scoring::{LineClearResult, Progress};
use crate::types::{Cell, BOARD_HEIGHT};

/// Write the piece's visible cells into the board.
///
/// Cells above the top edge are dropped. The piece itself is left untouched;
/// replacing it is the spawn controller's job. Returns the number of cells written.
pub fn lock(piece: &Piece, board: &mut Board) -> usize {
    let cell = Cell::Occupied {
        kind: piece.kind(),
        rotation: piece.rotation(),
    };

    piece
        .absolute_cells()
        .iter()
        .filter(|&&(_, y)| y >= 0)
        .filter(|&&(x, y)| board.set(x, y, cell))
        .count()
}

/// Indices of every completed row, top to bottom
pub fn find_completed_rows(board: &Board) -> RowList {
    board.full_rows()
}

/// Remove `rows` from the board and credit the clear.
///
/// An empty list changes nothing. Duplicate and out-of-range indices are
/// ignored. Rows are removed from the highest index down, so earlier removals
/// never shift rows still waiting to be removed.
pub fn clear_rows(
    rows: &[usize],
    board: &mut Board,
    progress: &mut Progress,
    rules: &Rules,
) -> LineClearResult {
    if rows.is_empty() {
        return LineClearResult::default();
    }

    let height = board.height() as usize;
    let mut marked = [false; BOARD_HEIGHT as usize];
    for &y in rows.iter().filter(|&&y| y < height) {
        marked[y] = true;
    }
    let ordered: RowList = (0..height).rev().filter(|&y| marked[y]).collect();

    let removed = board.remove_rows(&ordered);
    progress.apply_line_clear(removed, rules)
}
