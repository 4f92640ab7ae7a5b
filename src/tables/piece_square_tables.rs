//! Positional bonus tables, in tenths of a pawn.
//!
//! Indexed `[row][col]` from White's point of view (row 0 is rank 8). Black
//! pieces read the row-reversed table.

use crate::game_state::chess_types::{Color, Square};

/// Rewards advancing pawns, most strongly on the last two ranks before promotion.
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [70, 70, 70, 70, 70, 70, 70, 70],
    [40, 40, 40, 40, 40, 40, 40, 40],
    [15, 15, 20, 20, 20, 20, 15, 15],
    [0, 0, 5, 20, 20, 5, 0, 0],
    [5, 0, 0, 10, 10, 0, 0, 5],
    [5, 5, 10, 10, 10, 10, 5, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Rewards knights posted in the center.
pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 5, 10, 20, 20, 10, 5, 0],
    [0, 0, 10, 20, 20, 10, 0, 0],
    [0, 0, 10, 10, 10, 10, 0, 0],
    [0, 0, 10, 10, 10, 10, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Table entry for a piece of `color` on `square`.
#[inline]
pub fn table_value(table: &[[i32; 8]; 8], color: Color, square: Square) -> i32 {
    let row = match color {
        Color::White => square.row,
        Color::Black => 7 - square.row,
    };
    table[row as usize][square.col as usize]
}
