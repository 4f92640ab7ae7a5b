//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed squares that castling and promotion rules
//! refer to.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column holding both kings in the starting position.
pub const KING_HOME_COL: u8 = 4;

/// Number of trailing plies inspected by the repetition heuristic.
pub const REPETITION_WINDOW: usize = 8;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board in the standard starting arrangement.
pub fn starting_board() -> Board {
    let mut board: Board = [[None; 8]; 8];
    for (col, kind) in BACK_RANK.iter().enumerate() {
        board[0][col] = Some(Piece::new(Color::Black, *kind));
        board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        board[7][col] = Some(Piece::new(Color::White, *kind));
    }
    board
}

/// Home square of `color`'s king.
#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(color.back_rank(), KING_HOME_COL)
}

/// Row a pawn of `color` starts on (and may double-advance from).
#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_has_one_king_per_side_on_home_squares() {
        let board = starting_board();
        let kings: Vec<(Square, Piece)> = Square::all()
            .filter_map(|sq| board[sq.row as usize][sq.col as usize].map(|p| (sq, p)))
            .filter(|(_, p)| p.kind == PieceKind::King)
            .collect();
        assert_eq!(kings.len(), 2);
        assert!(kings.contains(&(king_home(Color::White), Piece::new(Color::White, PieceKind::King))));
        assert!(kings.contains(&(king_home(Color::Black), Piece::new(Color::Black, PieceKind::King))));
    }
}
