//! Search-backed engines: the two-ply lookahead, negamax and minimax
//! strategies behind the common `Engine` trait.

use std::fmt;
use std::str::FromStr;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::search_config::{CancellationToken, SearchConfig, Searcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Lookahead,
    Negamax,
    Minimax,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 3] = [Self::Lookahead, Self::Negamax, Self::Minimax];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lookahead => "lookahead",
            Self::Negamax => "negamax",
            Self::Minimax => "minimax",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown search strategy: {s}"))
    }
}

pub struct SearchEngine {
    strategy: SearchStrategy,
    searcher: Searcher,
}

impl SearchEngine {
    pub fn new(strategy: SearchStrategy, config: SearchConfig) -> Self {
        Self {
            strategy,
            searcher: Searcher::new(config),
        }
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Engine for SearchEngine {
    fn name(&self) -> &str {
        match self.strategy {
            SearchStrategy::Lookahead => "Sable Lookahead",
            SearchStrategy::Negamax => "Sable Negamax",
            SearchStrategy::Minimax => "Sable Minimax",
        }
    }

    fn new_game(&mut self) {
        self.searcher.reset();
    }

    fn set_cancellation_token(&mut self, cancel: CancellationToken) {
        self.searcher.set_cancellation_token(cancel);
    }

    fn choose_move(&mut self, game_state: &mut GameState, moves: &mut [Move]) -> EngineOutput {
        let result = match self.strategy {
            SearchStrategy::Lookahead => self.searcher.lookahead_search(game_state, moves),
            SearchStrategy::Negamax => self.searcher.negamax_search(game_state, moves),
            SearchStrategy::Minimax => self.searcher.minimax_search(game_state, moves),
        };
        EngineOutput {
            best_move: result.best_move,
            score: result.best_move.map(|_| result.score),
            nodes: result.nodes,
        }
    }
}
