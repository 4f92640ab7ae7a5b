//! Crate root module declarations for the Sable Chess engine.
//!
//! Exposes the rules engine (game state, move generation), the search
//! strategies and evaluator, the engine layer that wraps them for drivers,
//! and the text utilities (FEN, PGN, coordinate notation, board rendering).

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_notation;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod lookahead;
    pub mod minimax;
    pub mod negamax;
    pub mod random_move;
    pub mod search_config;
    pub mod threading;
}

pub mod tables {
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_search;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
}
