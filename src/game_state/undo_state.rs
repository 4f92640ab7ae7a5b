use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single history record pushed by every applied move and popped by undo.
///
/// Keeping the move and the state it overwrote in one record means the
/// history can never drift out of length-sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castle_rights: CastleRights,
    pub prev_en_passant: Option<Square>,
}

/// Record kept for a move taken back with `undo_move(true)`.
///
/// Stores the rights and en-passant target as they stood right after the
/// move, so redo restores them without recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedoState {
    pub mv: Move,
    pub castle_rights_after: CastleRights,
    pub en_passant_after: Option<Square>,
}
