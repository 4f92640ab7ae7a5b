use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

#[inline]
pub fn piece_on(board: &Board, square: Square) -> Option<Piece> {
    board[square.row as usize][square.col as usize]
}

#[inline]
pub fn is_empty(board: &Board, square: Square) -> bool {
    piece_on(board, square).is_none()
}

#[inline]
pub fn is_enemy(board: &Board, square: Square, own: Color) -> bool {
    matches!(piece_on(board, square), Some(piece) if piece.color != own)
}

/// Walks each direction one step at a time, stopping before a friendly piece
/// and after capturing an enemy piece.
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    own: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match piece_on(board, to) {
                None => push_move(board, from, to, out),
                Some(piece) if piece.color != own => {
                    push_move(board, from, to, out);
                    break;
                }
                Some(_) => break,
            }
            current = to;
        }
    }
}

/// Keeps every in-bounds offset that does not land on a friendly piece.
pub fn generate_leaper_moves(
    board: &Board,
    from: Square,
    own: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match piece_on(board, to) {
            Some(piece) if piece.color == own => {}
            _ => push_move(board, from, to, out),
        }
    }
}

#[inline]
pub fn push_move(board: &Board, from: Square, to: Square, out: &mut Vec<Move>) {
    if let Some(mv) = Move::new(from, to, board) {
        out.push(mv);
    }
}

#[cfg(test)]
pub(crate) fn empty_board_with(pieces: &[(Square, Piece)]) -> Board {
    let mut board: Board = [[None; 8]; 8];
    for (square, piece) in pieces {
        board[square.row as usize][square.col as usize] = Some(*piece);
    }
    board
}
