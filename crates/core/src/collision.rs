//! Collision test used before every translate, rotate and lock.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Would `piece`, shifted by `(dx, dy)`, leave the board or overlap a settled cell?
///
/// Cells above the top edge (y < 0) skip the occupancy check so a piece may
/// protrude while it enters, but they still have to be within the side walls.
pub fn collides(piece: &Piece, board: &Board, dx: i8, dy: i8) -> bool {
    piece.absolute_cells().iter().any(|&(x, y)| {
        let (x, y) = (x + dx, y + dy);
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

/// How many rows the piece can fall before it would collide
pub fn drop_distance(piece: &Piece, board: &Board) -> u8 {
    let mut distance: u8 = 0;
    while !collides(piece, board, 0, distance as i8 + 1) {
        distance += 1;
    }
    distance
}
