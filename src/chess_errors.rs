//! Errors used at the boundaries of the rules engine.
//!
//! The reducer itself is total and never fails; these errors are produced
//! only when raw text (square tokens, FEN, SAN, configuration) is turned
//! into engine values, so callers can reject input before dispatching.

use thiserror::Error;

/// Unified error type for parsing and boundary validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square token was not a file `a..h` followed by a rank `1..8`.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    /// A move was requested from a square onto itself.
    #[error("source and destination squares are the same: {0}")]
    SameSquare(String),

    /// The FEN string could not be interpreted.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A SAN token did not match any legal move in the position.
    #[error("invalid SAN move {token:?}: {reason}")]
    InvalidSan { token: String, reason: String },

    /// Configuration text failed to deserialize or held bad values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A state snapshot could not be written as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
