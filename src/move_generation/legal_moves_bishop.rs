use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, BISHOP_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_sliding_moves(
        &game_state.board,
        from,
        game_state.side_to_move,
        &BISHOP_DIRECTIONS,
        out,
    );
}
