//! Search tunables and the per-search accumulator.
//!
//! `Searcher` replaces process-wide search globals: it carries the RNG used
//! for shuffling and tie-breaking, the node counter for the current search,
//! and the cancellation flag polled by the recursion.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::moves::chess_move::Move;
use crate::search::board_scoring::{Score, CHECKMATE};

/// Outer alpha-beta window for the recursive strategies.
pub const SEARCH_BOUND: Score = 10 * CHECKMATE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Siblings examined at a node before an alpha-beta cutoff is honored.
    pub min_move_search: usize,
    /// Chance of switching to an equally scored root move.
    pub tie_swap_probability: f64,
    pub shuffle_moves: bool,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            min_move_search: 7,
            tie_swap_probability: 0.3,
            shuffle_moves: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Disables shuffling and tie swaps so results depend only on move order.
    pub fn deterministic(mut self) -> Self {
        self.shuffle_moves = false;
        self.tie_swap_probability = 0.0;
        self
    }
}

/// Cooperative stop flag shared between a driver and a running search.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Outcome of one search. `score` is from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub nodes: u64,
}

impl SearchResult {
    pub(crate) fn cancelled(nodes: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes,
        }
    }
}

pub struct Searcher {
    pub(crate) config: SearchConfig,
    pub(crate) rng: StdRng,
    pub(crate) cancel: CancellationToken,
    pub(crate) stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_cancellation(config, CancellationToken::new())
    }

    pub fn with_cancellation(config: SearchConfig, cancel: CancellationToken) -> Self {
        Self {
            config,
            rng: seeded_rng(config.seed),
            cancel,
            stats: SearchStats::default(),
        }
    }

    /// Rewinds the RNG to the configured seed and clears the counters, so a
    /// seeded searcher replays the same choices in a new game.
    pub fn reset(&mut self) {
        self.rng = seeded_rng(self.config.seed);
        self.stats = SearchStats::default();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Swaps in a fresh token, e.g. before handing the searcher to a new worker.
    pub fn set_cancellation_token(&mut self, cancel: CancellationToken) {
        self.cancel = cancel;
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub(crate) fn begin(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Counts a node and reports whether the search should unwind.
    #[inline]
    pub(crate) fn visit(&mut self) -> bool {
        self.stats.nodes += 1;
        self.cancel.is_cancelled()
    }

    pub(crate) fn shuffle(&mut self, moves: &mut [Move]) {
        if self.config.shuffle_moves {
            moves.shuffle(&mut self.rng);
        }
    }

    pub(crate) fn swap_on_tie(&mut self) -> bool {
        let p = self.config.tie_swap_probability;
        p > 0.0 && self.rng.random_bool(p.min(1.0))
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
