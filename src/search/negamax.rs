//! Depth-limited negamax with alpha-beta pruning.
//!
//! Every frame scores from the side to move's point of view and the parent
//! negates, with the window passed down as `(-beta, -alpha)`. Moves are
//! shuffled rather than ordered, so a cutoff is only taken once
//! `min_move_search` siblings have been looked at.

use tracing::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_board, Score};
use crate::search::search_config::{SearchConfig, SearchResult, Searcher, SEARCH_BOUND};

/// Negamax at the default depth. `None` means there was nothing to play.
pub fn find_best_move_minimax(game_state: &mut GameState, moves: &mut [Move]) -> Option<Move> {
    Searcher::new(SearchConfig::default())
        .negamax_search(game_state, moves)
        .best_move
}

impl Searcher {
    pub fn negamax_search(&mut self, game_state: &mut GameState, moves: &mut [Move]) -> SearchResult {
        self.begin();
        self.shuffle(moves);
        let depth = self.config.depth.max(1);
        let turn_multiplier = game_state.side_to_move.turn_multiplier();

        let result = match self.negamax_root(game_state, moves, depth, turn_multiplier) {
            Some((best_move, score)) => SearchResult {
                best_move,
                score,
                nodes: self.stats.nodes,
            },
            None => SearchResult::cancelled(self.stats.nodes),
        };
        debug!(depth, nodes = result.nodes, score = result.score, "negamax finished");
        result
    }

    fn negamax_root(
        &mut self,
        game_state: &mut GameState,
        moves: &[Move],
        depth: u8,
        turn_multiplier: Score,
    ) -> Option<(Option<Move>, Score)> {
        if self.visit() {
            return None;
        }

        let mut alpha = -SEARCH_BOUND;
        let beta = SEARCH_BOUND;
        let mut best_move = None;
        let mut best_score = -SEARCH_BOUND;

        for &mv in moves {
            apply_move(game_state, mv);
            // One point below alpha, so a move that only ties the best comes
            // back with its exact score instead of a fail-low bound.
            let child = self.negamax(game_state, depth - 1, -turn_multiplier, -beta, -(alpha - 1));
            revert_move(game_state);
            let score = -child?;
            trace!(mv = %mv, score, "root move scored");

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            } else if score == best_score && self.swap_on_tie() {
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        Some((best_move, best_score))
    }

    /// Score of the current position for the side to move, or `None` once
    /// cancelled.
    fn negamax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        turn_multiplier: Score,
        mut alpha: Score,
        beta: Score,
    ) -> Option<Score> {
        if self.visit() {
            return None;
        }

        // Also refreshes the terminal flags the evaluator reads.
        let mut moves = game_state.get_valid_moves();
        if depth == 0 || moves.is_empty() {
            return Some(turn_multiplier * score_board(game_state));
        }
        self.shuffle(&mut moves);

        let mut max_score = -SEARCH_BOUND;
        for (searched, mv) in moves.into_iter().enumerate() {
            apply_move(game_state, mv);
            let child = self.negamax(game_state, depth - 1, -turn_multiplier, -beta, -alpha);
            revert_move(game_state);
            let score = -child?;

            max_score = max_score.max(score);
            alpha = alpha.max(score);
            if alpha >= beta && searched + 1 >= self.config.min_move_search {
                break;
            }
        }
        Some(max_score)
    }
}

#[cfg(test)]
mod tests {
    use super::find_best_move_minimax;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::Move;
    use crate::search::board_scoring::CHECKMATE;
    use crate::search::search_config::{SearchConfig, Searcher};

    fn searcher(depth: u8) -> Searcher {
        Searcher::new(SearchConfig::default().with_depth(depth).with_seed(11).deterministic())
    }

    fn delivers_mate(game: &mut GameState, mv: Move) -> bool {
        game.make_move(mv);
        let _ = game.get_valid_moves();
        let mated = game.checkmate();
        game.undo_move(false);
        mated
    }

    #[test]
    fn depth_one_returns_the_only_winning_capture() {
        let mut game =
            GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let mut moves = game.get_valid_moves();
        let result = searcher(1).negamax_search(&mut game, &mut moves);
        let best = result.best_move.expect("white has moves");
        assert_eq!(best.long_algebraic(), "d1d5");
        assert!(best.is_capture());
    }

    #[test]
    fn finds_mate_in_one() {
        let mut game =
            GameState::from_fen("7k/8/6K1/8/8/8/8/1Q6 w - - 0 1").expect("FEN should parse");
        let mut moves = game.get_valid_moves();
        let result = searcher(1).negamax_search(&mut game, &mut moves);
        let best = result.best_move.expect("white has moves");
        assert_eq!(result.score, CHECKMATE);
        assert!(delivers_mate(&mut game, best), "picked {best}");

        // Deeper searches still see the mate score, though a slower mate may
        // tie with it.
        let mut moves = game.get_valid_moves();
        let result = searcher(3).negamax_search(&mut game, &mut moves);
        assert_eq!(result.score, CHECKMATE);
    }

    #[test]
    fn prefers_mate_over_stalemate() {
        // Qb6 stalemates; Qb7 mates.
        let mut game =
            GameState::from_fen("k7/8/2K5/8/8/8/8/1Q6 w - - 0 1").expect("FEN should parse");
        let mut moves = game.get_valid_moves();
        let result = searcher(2).negamax_search(&mut game, &mut moves);
        let best = result.best_move.expect("white has moves");
        assert!(delivers_mate(&mut game, best), "picked {best}");
    }

    #[test]
    fn black_to_move_maximizes_for_black() {
        let mut game =
            GameState::from_fen("3rk3/8/8/8/8/8/8/3QK3 b - - 0 1").expect("FEN should parse");
        let mut moves = game.get_valid_moves();
        let result = searcher(1).negamax_search(&mut game, &mut moves);
        assert_eq!(
            result.best_move.map(|m| m.long_algebraic()),
            Some("d8d1".to_owned())
        );
        assert!(result.score > 0);
    }

    #[test]
    fn no_legal_moves_returns_none() {
        let mut game =
            GameState::from_fen("k7/8/1Q6/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let mut moves = game.get_valid_moves();
        assert!(moves.is_empty());
        assert_eq!(find_best_move_minimax(&mut game, &mut moves), None);
    }

    #[test]
    fn cancelled_search_reports_no_move() {
        let mut game = GameState::new_game();
        let mut moves = game.get_valid_moves();
        let mut searcher = searcher(3);
        searcher.cancellation_token().cancel();
        let result = searcher.negamax_search(&mut game, &mut moves);
        assert_eq!(result.best_move, None);
        assert_eq!(game.snapshot(), GameState::new_game().snapshot());
    }

    #[test]
    fn search_restores_state_and_keeps_redo() {
        let mut game = GameState::new_game();
        let first = game.get_valid_moves()[0];
        game.make_move(first);
        game.undo_move(true);

        let before = game.snapshot();
        let mut moves = game.get_valid_moves();
        let result = searcher(2).negamax_search(&mut game, &mut moves);
        assert!(result.best_move.is_some());
        assert!(result.nodes > moves.len() as u64);
        assert_eq!(game.snapshot(), before);
        assert!(game.history().is_empty());
        assert!(game.can_redo());
    }

    #[test]
    fn tie_swaps_only_between_exact_scores() {
        // Rf1-h1 is generated last and hangs the rook to Rxh1, but Black's
        // first reply Rg8 alone would make it look level.
        let fen = "7r/8/8/k7/8/2K5/8/5R2 w - - 0 1";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let mut moves = game.get_valid_moves();
        let config = SearchConfig {
            depth: 2,
            min_move_search: 1,
            tie_swap_probability: 1.0,
            shuffle_moves: false,
            seed: Some(3),
        };
        let result = Searcher::new(config).negamax_search(&mut game, &mut moves);
        let best = result.best_move.expect("white has moves");
        assert_ne!(best.long_algebraic(), "f1h1");
        assert_eq!(result.score, 0);

        let mut exhaustive = searcher(2);
        exhaustive.config.min_move_search = usize::MAX;
        let exact = exhaustive.negamax_search(&mut game, &mut [best]).score;
        assert_eq!(exact, result.score, "picked {best}");
    }

    #[test]
    fn pruning_visits_fewer_nodes_with_a_lower_threshold() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let mut moves = game.get_valid_moves();

        let mut eager = searcher(3);
        eager.config.min_move_search = 1;
        let eager_nodes = eager.negamax_search(&mut game, &mut moves.clone()).nodes;

        let mut patient = searcher(3);
        patient.config.min_move_search = usize::MAX;
        let patient_nodes = patient.negamax_search(&mut game, &mut moves).nodes;

        assert!(eager_nodes < patient_nodes);
    }
}
