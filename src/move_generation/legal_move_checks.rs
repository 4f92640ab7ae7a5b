//! Direct square-attack probing.
//!
//! Answers "does `attacker` hit this square" by looking outward from the
//! square along pawn diagonals, king and knight offsets and sliding rays,
//! instead of generating the attacker's whole move list.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    piece_on, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let is_attacker = |sq: Square, kinds: &[PieceKind]| {
        matches!(piece_on(board, sq), Some(p) if p.color == attacker && kinds.contains(&p.kind))
    };

    // A pawn attacks diagonally forward, so look one row backwards from its view.
    let pawn_row = -attacker.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(sq) = square.offset(pawn_row, d_col) {
            if is_attacker(sq, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(sq) = square.offset(d_row, d_col) {
            if is_attacker(sq, &[PieceKind::Knight]) {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(sq) = square.offset(d_row, d_col) {
            if is_attacker(sq, &[PieceKind::King]) {
                return true;
            }
        }
    }

    ray_hits(board, square, &ROOK_DIRECTIONS, attacker, PieceKind::Rook)
        || ray_hits(board, square, &BISHOP_DIRECTIONS, attacker, PieceKind::Bishop)
}

/// Whether the first occupied square along any ray holds an `attacker`
/// `slider` or queen.
fn ray_hits(
    board: &Board,
    square: Square,
    directions: &[(i8, i8)],
    attacker: Color,
    slider: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_col) {
            if let Some(piece) = piece_on(board, next) {
                if piece.color == attacker
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
