//! Two-ply exhaustive lookahead.
//!
//! For each candidate move, the opponent's best reply is found by scoring every
//! reply position; the candidate that leaves the opponent the weakest best
//! reply wins. No pruning, so cost is the full width squared.

use tracing::debug;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_board, Score, CHECKMATE};
use crate::search::search_config::{SearchConfig, SearchResult, Searcher};

/// Two-ply lookahead with default settings.
pub fn find_best_move(game_state: &mut GameState, moves: &mut [Move]) -> Option<Move> {
    Searcher::new(SearchConfig::default())
        .lookahead_search(game_state, moves)
        .best_move
}

impl Searcher {
    /// No move is reported only when `moves` is empty or the search was
    /// cancelled.
    pub fn lookahead_search(&mut self, game_state: &mut GameState, moves: &mut [Move]) -> SearchResult {
        self.begin();
        let mover_sign = game_state.side_to_move.turn_multiplier();
        self.shuffle(moves);

        let mut best_move = None;
        let mut best_reply_score: Score = CHECKMATE;

        for &candidate in moves.iter() {
            if self.visit() {
                return SearchResult::cancelled(self.stats.nodes);
            }
            apply_move(game_state, candidate);
            let replies = game_state.get_valid_moves();

            // Opponent-relative: higher is better for the side replying.
            let opponent_best = if replies.is_empty() {
                -mover_sign * score_board(game_state)
            } else {
                let mut opponent_max = -CHECKMATE;
                for reply in replies {
                    self.stats.nodes += 1;
                    apply_move(game_state, reply);
                    let _ = game_state.get_valid_moves();
                    opponent_max = opponent_max.max(-mover_sign * score_board(game_state));
                    revert_move(game_state);
                }
                opponent_max
            };
            revert_move(game_state);

            if best_move.is_none() || opponent_best < best_reply_score {
                best_reply_score = opponent_best;
                best_move = Some(candidate);
            } else if opponent_best == best_reply_score && self.swap_on_tie() {
                best_move = Some(candidate);
            }
        }

        debug!(nodes = self.stats.nodes, score = -best_reply_score, "lookahead finished");
        SearchResult {
            best_move,
            score: -best_reply_score,
            nodes: self.stats.nodes,
        }
    }
}
