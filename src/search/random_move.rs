//! Uniform random move selection: the baseline strategy and the fallback when
//! a search returns nothing.

use rand::prelude::IndexedRandom;

use crate::moves::chess_move::Move;
use crate::search::search_config::Searcher;

/// Picks uniformly from `moves` using the thread-local RNG.
pub fn find_random_move(moves: &[Move]) -> Option<Move> {
    let mut rng = rand::rng();
    moves.choose(&mut rng).copied()
}

impl Searcher {
    /// Same as [`find_random_move`] but draws from the searcher's RNG, so a
    /// seeded config picks reproducibly.
    pub fn random_move(&mut self, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::find_random_move;
    use crate::game_state::chess_types::*;
    use crate::search::search_config::{SearchConfig, Searcher};

    #[test]
    fn empty_list_yields_none() {
        assert_eq!(find_random_move(&[]), None);
    }

    #[test]
    fn pick_is_drawn_from_the_list() {
        let mut game = GameState::new_game();
        let moves = game.get_valid_moves();
        for _ in 0..20 {
            let mv = find_random_move(&moves).expect("start position has moves");
            assert!(moves.iter().any(|m| m.is_identical(&mv)));
        }
    }

    #[test]
    fn seeded_searchers_agree() {
        let mut game = GameState::new_game();
        let moves = game.get_valid_moves();
        let mut a = Searcher::new(SearchConfig::default().with_seed(42));
        let mut b = Searcher::new(SearchConfig::default().with_seed(42));
        for _ in 0..10 {
            assert_eq!(a.random_move(&moves), b.random_move(&moves));
        }
    }
}
