//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves piece by piece, plays each one speculatively,
//! discards those that leave the mover's king attacked, and refreshes the
//! checkmate / stalemate / repetition flags from the result.

use tracing::debug;

use crate::game_state::chess_rules::REPETITION_WINDOW;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

impl GameState {
    /// Legal moves for the side to move.
    ///
    /// Also recomputes `checkmate`, `stalemate` and `stalemate_by_repeat`, so
    /// callers must re-fetch after every mutation to see current flags.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let rights_before = self.castle_rights;
        let en_passant_before = self.en_passant;

        let pseudo = generate_pseudo_legal_moves(self);
        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            apply_move(self, mv);
            if !is_square_attacked(&self.board, self.king_loc(mover), mover.opposite()) {
                legal.push(mv);
            }
            revert_move(self);
        }

        debug_assert_eq!(self.castle_rights, rights_before);
        debug_assert_eq!(self.en_passant, en_passant_before);

        if legal.is_empty() {
            if self.in_check() {
                self.checkmate = true;
                self.stalemate = false;
                debug!(side = %mover, "checkmate detected");
            } else {
                self.checkmate = false;
                self.stalemate = true;
                debug!(side = %mover, "stalemate detected");
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        self.stalemate_by_repeat = last_moves_repeat(self);

        legal
    }
}

/// Moves obeying piece movement rules, ignoring whether the mover's own king
/// ends up attacked.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for square in Square::all() {
        let Some(piece) = game_state.piece_at(square) else {
            continue;
        };
        if piece.color != game_state.side_to_move {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, square, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, square, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, square, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, square, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, square, &mut out),
            PieceKind::King => generate_king_moves(game_state, square, &mut out),
        }
    }
    out
}

/// The last eight moves form two identical back-to-back four-move cycles.
///
/// A cheap proxy for repetition: it compares moves by origin and destination,
/// not whole positions.
fn last_moves_repeat(game_state: &GameState) -> bool {
    let history = &game_state.history;
    if history.len() < REPETITION_WINDOW {
        return false;
    }
    let half = REPETITION_WINDOW / 2;
    let window = &history[history.len() - REPETITION_WINDOW..];
    let (older, newer) = window.split_at(half);
    older.iter().zip(newer).all(|(a, b)| a.mv == b.mv)
}
