//! Random-move engine.
//!
//! Selects uniformly from legal moves; used as the weakest opponent and as the
//! driver's fallback when a search comes back empty.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::search_config::{SearchConfig, Searcher};

pub struct RandomEngine {
    searcher: Searcher,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Only the seed of `config` matters here.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Sable Random"
    }

    fn new_game(&mut self) {
        self.searcher.reset();
    }

    fn choose_move(&mut self, _game_state: &mut GameState, moves: &mut [Move]) -> EngineOutput {
        EngineOutput {
            best_move: self.searcher.random_move(moves),
            score: None,
            nodes: 0,
        }
    }
}
