//! Core incremental board state representation.
//!
//! `GameState` owns the 8x8 board, the side to move, cached king squares,
//! castling rights, the en-passant target, terminal flags and the undo/redo
//! history. It is mutated in place for the whole game; every change goes
//! through `make_move`, `undo_move` or `redo_move` so the history stays
//! consistent with the board.

use crate::errors::ChessError;
use crate::game_state::chess_rules::{king_home, starting_board};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king_loc: Square,
    pub(crate) black_king_loc: Square,
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant: Option<Square>,

    // Terminal flags, refreshed by `get_valid_moves`.
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) stalemate_by_repeat: bool,

    pub(crate) history: Vec<UndoState>,
    pub(crate) redo_stack: Vec<RedoState>,
}

/// The parts of a `GameState` that define the position itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub white_king_loc: Square,
    pub black_king_loc: Square,
    pub castle_rights: CastleRights,
    pub en_passant: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position with full castling rights.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            side_to_move: Color::White,
            white_king_loc: king_home(Color::White),
            black_king_loc: king_home(Color::Black),
            castle_rights: CastleRights::ALL,
            en_passant: None,
            checkmate: false,
            stalemate: false,
            stalemate_by_repeat: false,
            history: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Position without history built from raw parts; used by the FEN parser.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        white_king_loc: Square,
        black_king_loc: Square,
        castle_rights: CastleRights,
        en_passant: Option<Square>,
    ) -> Self {
        Self {
            board,
            side_to_move,
            white_king_loc,
            black_king_loc,
            castle_rights,
            en_passant,
            checkmate: false,
            stalemate: false,
            stalemate_by_repeat: false,
            history: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Discards the game and returns to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    // --- Read-only surface ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn white_king_loc(&self) -> Square {
        self.white_king_loc
    }

    #[inline]
    pub fn black_king_loc(&self) -> Square {
        self.black_king_loc
    }

    #[inline]
    pub fn king_loc(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_loc,
            Color::Black => self.black_king_loc,
        }
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn stalemate_by_repeat(&self) -> bool {
        self.stalemate_by_repeat
    }

    /// True once the last `get_valid_moves` call found the game finished.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate || self.stalemate_by_repeat
    }

    /// Moves played so far, oldest first.
    pub fn move_log(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.history.iter().map(|record| &record.mv)
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            board: self.board,
            side_to_move: self.side_to_move,
            white_king_loc: self.white_king_loc,
            black_king_loc: self.black_king_loc,
            castle_rights: self.castle_rights,
            en_passant: self.en_passant,
        }
    }

    // --- Mutation ---

    /// Plays `mv`, which must come from the latest `get_valid_moves` result.
    /// Starting a new line discards anything available to redo.
    pub fn make_move(&mut self, mv: Move) {
        self.redo_stack.clear();
        apply_move(self, mv);
    }

    /// Takes back the last move. With `keep_for_redo` the move can later be
    /// replayed by `redo_move`. No-op on an empty history.
    pub fn undo_move(&mut self, keep_for_redo: bool) {
        let castle_rights_after = self.castle_rights;
        let en_passant_after = self.en_passant;
        let Some(record) = revert_move(self) else {
            return;
        };
        if keep_for_redo {
            self.redo_stack.push(RedoState {
                mv: record.mv,
                castle_rights_after,
                en_passant_after,
            });
        }
    }

    /// Replays the most recently undone move. No-op if nothing was undone.
    pub fn redo_move(&mut self) {
        let Some(redo) = self.redo_stack.pop() else {
            return;
        };
        apply_move(self, redo.mv);
        self.castle_rights = redo.castle_rights_after;
        self.en_passant = redo.en_passant_after;
    }

    // --- Attack queries ---

    /// Whether the side to move has its king attacked.
    pub fn in_check(&self) -> bool {
        self.king_attacked(self.king_loc(self.side_to_move))
    }

    /// Whether the opponent of the side to move attacks `square`.
    pub fn king_attacked(&self, square: Square) -> bool {
        is_square_attacked(&self.board, square, self.side_to_move.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::*;
    use crate::utils::long_algebraic::find_legal_move;

    fn play(game: &mut GameState, lan: &str) {
        let moves = game.get_valid_moves();
        let mv = find_legal_move(&moves, lan).expect("move should be legal");
        game.make_move(mv);
    }

    #[test]
    fn undo_restores_every_position_field() {
        let mut game = GameState::new_game();
        for lan in ["e2e4", "d7d5", "e4d5", "g8f6", "f1b5", "c7c6"] {
            play(&mut game, lan);
        }
        let moves = game.get_valid_moves();
        for mv in moves {
            let before = game.snapshot();
            game.make_move(mv);
            game.undo_move(false);
            assert_eq!(game.snapshot(), before, "round trip failed for {mv}");
        }
    }

    #[test]
    fn redo_reaches_same_state_as_direct_move() {
        let mut direct = GameState::new_game();
        play(&mut direct, "e2e4");
        play(&mut direct, "c7c5");

        let mut replayed = GameState::new_game();
        play(&mut replayed, "e2e4");
        play(&mut replayed, "c7c5");
        replayed.undo_move(true);
        replayed.undo_move(true);
        assert!(replayed.can_redo());
        replayed.redo_move();
        replayed.redo_move();

        assert_eq!(replayed.snapshot(), direct.snapshot());
        assert_eq!(replayed.history(), direct.history());
        assert!(!replayed.can_redo());
    }

    /// Plays `line` from `fen`, undoes all of it keeping redo, then checks
    /// every redo lands on the position the direct line passed through.
    fn assert_redo_replays(fen: &str, line: &[&str]) -> GameState {
        let mut direct = GameState::from_fen(fen).expect("FEN should parse");
        let mut snapshots = vec![direct.snapshot()];
        for lan in line {
            play(&mut direct, lan);
            snapshots.push(direct.snapshot());
        }

        let mut replayed = direct.clone();
        for _ in line {
            replayed.undo_move(true);
        }
        assert_eq!(replayed.snapshot(), snapshots[0], "{fen}: full undo");
        for (ply, expected) in snapshots.iter().enumerate().skip(1) {
            replayed.redo_move();
            assert_eq!(&replayed.snapshot(), expected, "{fen}: redo of ply {ply}");
        }
        assert_eq!(replayed.history(), direct.history());
        replayed
    }

    #[test]
    fn redo_restores_rights_after_castling_both_ways() {
        let game = assert_redo_replays("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["e1g1", "e8c8"]);
        assert_eq!(game.castle_rights(), CastleRights::NONE);
        assert_eq!(
            game.piece_at(Square::new(7, 5)),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            game.piece_at(Square::new(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn redo_restores_rights_lost_to_a_rook_capture() {
        let game = assert_redo_replays("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["a1a8", "e8e7"]);
        let rights = game.castle_rights();
        assert!(!rights.queen_side(Color::White));
        assert!(!rights.queen_side(Color::Black));
        assert!(rights.king_side(Color::White));
        assert!(!rights.king_side(Color::Black));
    }

    #[test]
    fn redo_restores_en_passant_target_and_capture() {
        let fen = "4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        play(&mut game, "e2e4");
        game.undo_move(true);
        game.redo_move();
        assert_eq!(game.en_passant_target(), Some(Square::new(5, 4)));
        let ep = game.get_valid_moves().into_iter().find(|m| m.is_en_passant);
        assert!(ep.is_some(), "redo should re-open the en-passant capture");

        let game = assert_redo_replays(fen, &["e2e4", "d4e3"]);
        assert_eq!(game.piece_at(Square::new(4, 4)), None);
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn redo_replays_capturing_promotion() {
        let game = assert_redo_replays("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", &["a7b8", "e8e7"]);
        assert_eq!(
            game.piece_at(Square::new(0, 1)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(game.piece_at(Square::new(1, 0)), None);
    }

    #[test]
    fn new_move_after_undo_clears_redo() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");
        game.undo_move(true);
        assert!(game.can_redo());
        play(&mut game, "d2d4");
        assert!(!game.can_redo());
        game.redo_move();
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn valid_move_queries_keep_redo_available() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");
        game.undo_move(true);
        let _ = game.get_valid_moves();
        assert!(game.can_redo());
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_are_no_ops() {
        let mut game = GameState::new_game();
        let before = game.snapshot();
        game.undo_move(true);
        game.redo_move();
        assert_eq!(game.snapshot(), before);
        assert!(game.white_to_move());
    }

    #[test]
    fn side_to_move_toggles_once_per_call() {
        let mut game = GameState::new_game();
        play(&mut game, "g1f3");
        assert!(!game.white_to_move());
        game.undo_move(true);
        assert!(game.white_to_move());
        game.redo_move();
        assert!(!game.white_to_move());
    }

    #[test]
    fn reset_returns_to_start() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");
        game.undo_move(true);
        game.reset();
        assert_eq!(game.snapshot(), GameState::new_game().snapshot());
        assert!(!game.can_undo());
        assert!(!game.can_redo());
    }

    #[test]
    fn king_cache_tracks_king_moves() {
        let mut game = GameState::new_game();
        for lan in ["e2e4", "e7e5", "e1e2"] {
            play(&mut game, lan);
        }
        assert_eq!(game.white_king_loc(), Square::new(6, 4));
        assert_eq!(
            game.piece_at(game.white_king_loc()),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        game.undo_move(false);
        assert_eq!(game.white_king_loc(), Square::new(7, 4));
    }
}
