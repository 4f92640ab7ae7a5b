//! Coordinate-notation move input (`e2e4`, `e7e8q`).
//!
//! Text is resolved against a legal move list rather than built into a move
//! directly, so flags such as castling and en passant come from the generator.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Splits `e2e4` / `e7e8q` into its two squares. Only queen promotion exists,
/// so a trailing `q` is accepted and carries no information.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::IllegalMove(text.to_owned()));
    }
    if text.len() == 5 && !text[4..].eq_ignore_ascii_case("q") {
        return Err(ChessError::IllegalMove(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok((from, to))
}

/// Finds the move in `moves` matching `text` by origin and destination.
pub fn find_legal_move(moves: &[Move], text: &str) -> ChessResult<Move> {
    let (from, to) = parse_long_algebraic(text)?;
    moves
        .iter()
        .find(|mv| mv.start == from && mv.end == to)
        .copied()
        .ok_or_else(|| ChessError::IllegalMove(text.trim().to_owned()))
}
