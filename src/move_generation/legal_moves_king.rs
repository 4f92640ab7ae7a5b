use crate::game_state::chess_rules::king_home;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{
    generate_leaper_moves, is_empty, piece_on, KING_OFFSETS,
};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_leaper_moves(
        &game_state.board,
        from,
        game_state.side_to_move,
        &KING_OFFSETS,
        out,
    );
    if from == king_home(game_state.side_to_move) {
        generate_castling_moves(game_state, from, out);
    }
}

/// Castling is offered only while the king sits on its home square, the
/// right is intact, the rook is still there, the squares between are empty
/// and the king's start, transit and landing squares are all unattacked.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let board = &game_state.board;
    let row = king_from.row;

    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    let rook = Some(Piece::new(side, PieceKind::Rook));

    if game_state.castle_rights.king_side(side) && piece_on(board, Square::new(row, 7)) == rook {
        let f = Square::new(row, 5);
        let g = Square::new(row, 6);
        if is_empty(board, f)
            && is_empty(board, g)
            && !is_square_attacked(board, f, enemy)
            && !is_square_attacked(board, g, enemy)
        {
            out.push(Move::castle(king_from, g, side));
        }
    }

    if game_state.castle_rights.queen_side(side) && piece_on(board, Square::new(row, 0)) == rook {
        let d = Square::new(row, 3);
        let c = Square::new(row, 2);
        let b = Square::new(row, 1);
        if is_empty(board, d)
            && is_empty(board, c)
            && is_empty(board, b)
            && !is_square_attacked(board, d, enemy)
            && !is_square_attacked(board, c, enemy)
        {
            out.push(Move::castle(king_from, c, side));
        }
    }
}
