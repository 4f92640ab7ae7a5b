//! Immutable description of one ply.
//!
//! A `Move` snapshots the moving and captured pieces at construction time so
//! undo can restore the board without consulting anything else.

use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_pawn_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// Ordinary move or capture; promotion is flagged automatically when a
    /// pawn reaches the far rank.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Self> {
        let piece_moved = board[start.row as usize][start.col as usize]?;
        let is_pawn_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row == promotion_row(piece_moved.color);
        Some(Self {
            start,
            end,
            piece_moved,
            piece_captured: board[end.row as usize][end.col as usize],
            is_pawn_promotion,
            is_en_passant: false,
            is_castle: false,
        })
    }

    /// Diagonal pawn capture onto the empty en-passant target square.
    pub fn en_passant(start: Square, end: Square, pawn_color: Color) -> Self {
        Self {
            start,
            end,
            piece_moved: Piece::new(pawn_color, PieceKind::Pawn),
            piece_captured: Some(Piece::new(pawn_color.opposite(), PieceKind::Pawn)),
            is_pawn_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// Two-file king move; the rook relocation is implied by `end.col`.
    pub fn castle(start: Square, end: Square, king_color: Color) -> Self {
        Self {
            start,
            end,
            piece_moved: Piece::new(king_color, PieceKind::King),
            piece_captured: None,
            is_pawn_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_king_side_castle(&self) -> bool {
        self.is_castle && self.end.col > self.start.col
    }

    /// Square of the pawn removed by an en-passant capture: the destination
    /// file on the origin rank.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        Square::new(self.start.row, self.end.col)
    }

    /// Rook origin and destination for a castling move.
    pub fn castle_rook_squares(&self) -> (Square, Square) {
        let row = self.start.row;
        if self.is_king_side_castle() {
            (Square::new(row, 7), Square::new(row, self.end.col - 1))
        } else {
            (Square::new(row, 0), Square::new(row, self.end.col + 1))
        }
    }

    /// Full structural equality, including captured piece and special flags.
    pub fn is_identical(&self, other: &Move) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.piece_moved == other.piece_moved
            && self.piece_captured == other.piece_captured
            && self.is_pawn_promotion == other.is_pawn_promotion
            && self.is_en_passant == other.is_en_passant
            && self.is_castle == other.is_castle
    }
}

/// Moves compare by origin and destination only, so a clicked `(start, end)`
/// pair matches the generated move regardless of its special-move flags.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_rules::starting_board;
    use crate::game_state::chess_types::*;

    #[test]
    fn equality_ignores_special_flags() {
        let start = Square::new(3, 4);
        let end = Square::new(2, 3);
        let plain = Move {
            start,
            end,
            piece_moved: Piece::new(Color::White, PieceKind::Pawn),
            piece_captured: Some(Piece::new(Color::Black, PieceKind::Knight)),
            is_pawn_promotion: false,
            is_en_passant: false,
            is_castle: false,
        };
        let en_passant = Move::en_passant(start, end, Color::White);
        assert_eq!(plain, en_passant);
        assert!(!plain.is_identical(&en_passant));
    }

    #[test]
    fn constructor_captures_board_contents() {
        let board = starting_board();
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4), &board)
            .expect("e2 holds a pawn");
        assert_eq!(mv.piece_moved, Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(mv.piece_captured, None);
        assert!(!mv.is_pawn_promotion);
        assert!(Move::new(Square::new(4, 4), Square::new(3, 4), &board).is_none());
    }

    #[test]
    fn castle_rook_squares_follow_side() {
        let king_side = Move::castle(Square::new(7, 4), Square::new(7, 6), Color::White);
        assert_eq!(
            king_side.castle_rook_squares(),
            (Square::new(7, 7), Square::new(7, 5))
        );
        let queen_side = Move::castle(Square::new(0, 4), Square::new(0, 2), Color::Black);
        assert_eq!(
            queen_side.castle_rook_squares(),
            (Square::new(0, 0), Square::new(0, 3))
        );
    }
}
