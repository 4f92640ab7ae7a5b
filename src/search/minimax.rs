//! Two-branch minimax with alpha-beta: White maximizes and Black minimizes a
//! White-relative score. Same pruning threshold and root tie-breaking as the
//! negamax search; kept as an alternative strategy for comparison.

use tracing::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_board, Score};
use crate::search::search_config::{SearchResult, Searcher, SEARCH_BOUND};

impl Searcher {
    pub fn minimax_search(&mut self, game_state: &mut GameState, moves: &mut [Move]) -> SearchResult {
        self.begin();
        self.shuffle(moves);
        let depth = self.config.depth.max(1);
        let mover_sign = game_state.side_to_move.turn_multiplier();
        let maximizing = game_state.white_to_move();

        let mut alpha = -SEARCH_BOUND;
        let mut beta = SEARCH_BOUND;
        let mut best_move = None;
        let mut best_score = if maximizing { -SEARCH_BOUND } else { SEARCH_BOUND };

        for &mv in moves.iter() {
            if self.visit() {
                return SearchResult::cancelled(self.stats.nodes);
            }
            // Widened by one on the root's side so ties are scored exactly.
            let (low, high) = if maximizing {
                (alpha - 1, beta)
            } else {
                (alpha, beta + 1)
            };
            apply_move(game_state, mv);
            let child = self.minimax(game_state, depth - 1, low, high);
            revert_move(game_state);
            let Some(score) = child else {
                return SearchResult::cancelled(self.stats.nodes);
            };
            trace!(mv = %mv, score, "root move scored");

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best_move.is_none() || improves {
                best_score = score;
                best_move = Some(mv);
            } else if score == best_score && self.swap_on_tie() {
                best_move = Some(mv);
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        debug!(depth, nodes = self.stats.nodes, score = best_score, "minimax finished");
        SearchResult {
            best_move,
            score: mover_sign * best_score,
            nodes: self.stats.nodes,
        }
    }

    fn minimax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
    ) -> Option<Score> {
        if self.visit() {
            return None;
        }

        let mut moves = game_state.get_valid_moves();
        if depth == 0 || moves.is_empty() {
            return Some(score_board(game_state));
        }
        self.shuffle(&mut moves);

        let maximizing = game_state.white_to_move();
        let mut best = if maximizing { -SEARCH_BOUND } else { SEARCH_BOUND };
        for (searched, mv) in moves.into_iter().enumerate() {
            apply_move(game_state, mv);
            let child = self.minimax(game_state, depth - 1, alpha, beta);
            revert_move(game_state);
            let score = child?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta && searched + 1 >= self.config.min_move_search {
                break;
            }
        }
        Some(best)
    }
}
