use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    generate_sliding_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::moves::chess_move::Move;

/// Queen moves are the union of rook and bishop rays.
pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let own = game_state.side_to_move;
    generate_sliding_moves(&game_state.board, from, own, &ROOK_DIRECTIONS, out);
    generate_sliding_moves(&game_state.board, from, own, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn central_queen_on_empty_board_has_27_moves() {
        let game = GameState::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_queen_moves(&game, Square::new(4, 3), &mut out);
        assert_eq!(out.len(), 27);
    }
}
