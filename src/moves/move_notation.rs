//! Human-readable move rendering for move lists and logs.

use std::fmt;

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;

impl Move {
    /// Short notation: piece letter (omitted for pawns), `x` on captures,
    /// destination square, `=Q` on promotion, `O-O` / `O-O-O` for castling.
    /// Pawn captures carry their origin file (`exd5`).
    pub fn chess_notation(&self) -> String {
        if self.is_castle {
            return if self.is_king_side_castle() {
                "O-O".to_owned()
            } else {
                "O-O-O".to_owned()
            };
        }

        let mut out = String::with_capacity(6);
        match self.piece_moved.kind {
            PieceKind::Pawn => {
                if self.is_capture() {
                    out.push(self.start.file_char());
                }
            }
            kind => out.push(kind.letter()),
        }
        if self.is_capture() {
            out.push('x');
        }
        out.push_str(&self.end.to_string());
        if self.is_pawn_promotion {
            out.push_str("=Q");
        }
        out
    }

    /// Coordinate notation such as `e2e4` or `e7e8q`.
    pub fn long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.start, self.end);
        if self.is_pawn_promotion {
            out.push('q');
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chess_notation())
    }
}
