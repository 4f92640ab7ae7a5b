//! Error type for the text-facing surfaces of the crate.
//!
//! Core board mutation has no error path: moves must come from the latest
//! `get_valid_moves` result. Parsing and I/O are where bad input shows up, so
//! those return `ChessResult`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChessError {
    #[error("invalid square: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The text named a move that is not in the current legal list.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("search worker stopped without reporting a result")]
    WorkerDisconnected,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;
