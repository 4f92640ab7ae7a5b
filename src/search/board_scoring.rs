//! Static position evaluation.
//!
//! Scores are White-relative (`+` favors White) and expressed in tenths of a
//! pawn, so fractional weights such as 9.5 or 3.3 stay exact.

use crate::game_state::chess_types::*;
use crate::tables::piece_square_tables::{table_value, KNIGHT_TABLE, PAWN_TABLE};

/// Evaluation unit: tenths of a pawn.
pub type Score = i32;

pub const SCORE_SCALE: Score = 10;
pub const CHECKMATE: Score = 100 * SCORE_SCALE;
pub const STALEMATE: Score = 0;

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::King => 0,
        PieceKind::Queen => 95,
        PieceKind::Rook => 50,
        PieceKind::Bishop => 33,
        PieceKind::Knight => 30,
        PieceKind::Pawn => 10,
    }
}

/// Plain material balance.
pub fn score_material(board: &Board) -> Score {
    let mut score = 0;
    for row in board {
        for piece in row.iter().flatten() {
            score += piece.color.turn_multiplier() * piece_value(piece.kind);
        }
    }
    score
}

/// Full evaluation: terminal states first, then material plus the pawn and
/// knight placement bonuses.
///
/// Relies on the terminal flags, so call it after `get_valid_moves`.
pub fn score_board(game_state: &GameState) -> Score {
    if game_state.checkmate {
        // The side to move has been mated.
        return -game_state.side_to_move.turn_multiplier() * CHECKMATE;
    }
    if game_state.stalemate {
        return STALEMATE;
    }

    let mut score = 0;
    for square in Square::all() {
        let Some(piece) = game_state.piece_at(square) else {
            continue;
        };
        let positional = match piece.kind {
            PieceKind::Pawn => table_value(&PAWN_TABLE, piece.color, square),
            PieceKind::Knight => table_value(&KNIGHT_TABLE, piece.color, square),
            _ => 0,
        };
        score += piece.color.turn_multiplier() * (piece_value(piece.kind) + positional);
    }
    score
}

/// Renders a score as a decimal pawn count, e.g. `9.5` or `-0.5`.
pub fn format_score(score: Score) -> String {
    let sign = if score < 0 { "-" } else { "" };
    let abs = score.unsigned_abs();
    let scale = SCORE_SCALE.unsigned_abs();
    format!("{sign}{}.{}", abs / scale, abs % scale)
}
