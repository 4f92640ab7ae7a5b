use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_sliding_moves(
        &game_state.board,
        from,
        game_state.side_to_move,
        &ROOK_DIRECTIONS,
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_open_board_covers_fourteen_squares() {
        let game = GameState::from_fen("7k/8/8/8/3R4/8/8/K7 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, Square::new(4, 3), &mut out);
        assert_eq!(out.len(), 14);
        assert!(out.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn boxed_in_rook_has_no_moves() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_rook_moves(&game, Square::new(7, 0), &mut out);
        assert!(out.is_empty());
    }
}
