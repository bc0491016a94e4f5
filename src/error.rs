//! Error types for the Reversi engine
//!
//! Construction and configuration failures surface as [`EngineError`].
//! [`SearchError`] only travels inside the search and is absorbed by the
//! iterative-deepening driver, so callers of `select_move` never see it.

use thiserror::Error;

/// Errors raised while building boards, weights or engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board side length with no positional-weight table
    #[error("Unsupported board size: {0} (must be 6, 8, 10 or 12)")]
    UnsupportedBoardSize(usize),

    /// Phase-weight vector with the wrong number of entries
    #[error("Weight vector must have {expected} entries, got {got}")]
    WeightVectorLength { expected: usize, got: usize },

    /// Text board that is ragged, non-square or contains unknown characters
    #[error("Malformed board at row {row}: {message}")]
    MalformedBoard { row: usize, message: String },
}

/// Cancellation signal raised inside the recursive search.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The per-turn wall-clock budget ran out mid-search
    #[error("Search deadline exceeded")]
    DeadlineExceeded,
}

/// Result type alias for engine construction
pub type EngineResult<T> = Result<T, EngineError>;
