//! Move-path enumeration for validating the legal move generator.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

/// Counts leaf paths `depth` plies below `game_state`, restoring it afterwards.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, depth, &mut counts);
    counts
}

/// Leaf count only.
pub fn perft_nodes(game_state: &mut GameState, depth: u8) -> usize {
    perft(game_state, depth).nodes
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = game_state.get_valid_moves();
    for mv in moves {
        apply_move(game_state, mv);
        if depth == 1 {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            if mv.is_en_passant {
                counts.en_passant += 1;
            }
            if mv.is_castle {
                counts.castles += 1;
            }
            if mv.is_pawn_promotion {
                counts.promotions += 1;
            }
            if game_state.in_check() {
                counts.checks += 1;
            }
        } else {
            perft_recurse(game_state, depth - 1, counts);
        }
        revert_move(game_state);
    }
}
