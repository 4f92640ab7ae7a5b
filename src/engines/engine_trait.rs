//! Engine abstraction used by the terminal driver and the search worker.
//!
//! Each strategy sits behind the same trait so players can be picked at
//! runtime and handed to a background thread as `Box<dyn Engine>`.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::Score;
use crate::search::search_config::CancellationToken;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Mover-relative evaluation, when the strategy computes one.
    pub score: Option<Score>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Called when the driver starts over; seeded engines rewind their RNG.
    fn new_game(&mut self) {}

    /// Installs the flag a running search polls. Strategies that finish
    /// instantly may ignore it.
    fn set_cancellation_token(&mut self, _cancel: CancellationToken) {}

    /// Picks a move from `moves`, the current legal list for `game_state`.
    ///
    /// The state may be mutated during the search but is restored before
    /// returning. `best_move` is `None` only for an empty list or a cancelled
    /// search.
    fn choose_move(&mut self, game_state: &mut GameState, moves: &mut [Move]) -> EngineOutput;
}
