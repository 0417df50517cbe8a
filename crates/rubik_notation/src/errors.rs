use std::num::ParseIntError;

use thiserror::Error;

/// Error produced when parsing a single move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Empty string
    #[error("empty move")]
    Empty,
    /// Layer count prefix is not a valid integer
    #[error("invalid layer count: {0}")]
    ParseInt(#[from] ParseIntError),
    /// Layer count prefix of zero
    #[error("layer count must be at least 1")]
    ZeroDepth,
    /// Layer count prefix without a `w`
    ///
    /// `3R` is ambiguous between a slice turn and a wide turn, so only `3Rw`
    /// is accepted.
    #[error("layer count prefix requires a wide move, such as `3Rw`")]
    PrefixWithoutWide,
    /// Missing or unknown face letter
    #[error("expected one of U, D, L, R, F, B; got {0:?}")]
    UnknownLayer(String),
    /// Unrecognized characters after the face letter
    #[error("invalid suffix {0:?}")]
    InvalidSuffix(String),
}

/// Error produced when parsing a sequence of moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid move {token:?} at position {index}")]
pub struct ParseMovesError {
    /// Zero-based index of the offending token.
    pub index: usize,
    /// Text of the offending token.
    pub token: String,
    /// Reason the token was rejected.
    pub source: ParseMoveError,
}
