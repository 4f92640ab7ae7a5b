use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_leaper_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_leaper_moves(
        &game_state.board,
        from,
        game_state.side_to_move,
        &KNIGHT_OFFSETS,
        out,
    );
}
