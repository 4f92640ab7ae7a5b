use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_empty, is_enemy, push_move};
use crate::moves::chess_move::Move;

/// Single and double pushes, diagonal captures and en-passant captures.
/// Promotion is flagged by `Move::new` when the destination is the far rank.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let side = game_state.side_to_move;
    let dir = side.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if is_empty(board, one) {
            push_move(board, from, one, out);
            if from.row == pawn_home_row(side) {
                if let Some(two) = one.offset(dir, 0) {
                    if is_empty(board, two) {
                        push_move(board, from, two, out);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(dir, d_col) else {
            continue;
        };
        if is_enemy(board, target, side) {
            push_move(board, from, target, out);
        } else if game_state.en_passant == Some(target) {
            out.push(Move::en_passant(from, target, side));
        }
    }
}
