//! Typed service-boundary errors.

use std::fmt;

use npuzzle_board::BoardError;

/// Rejection detected before any search begins.
///
/// These never reach a strategy loop; the wire layer shows them as an
/// `"invalid"` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The start board failed validation.
    InvalidStart(BoardError),
    /// The goal board failed validation.
    InvalidGoal(BoardError),
    /// The algorithm name is not in the supported set.
    UnknownAlgorithm { name: String },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart(error) => write!(f, "invalid start board: {error}"),
            Self::InvalidGoal(error) => write!(f, "invalid goal board: {error}"),
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm '{name}'"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidStart(error) | Self::InvalidGoal(error) => Some(error),
            Self::UnknownAlgorithm { .. } => None,
        }
    }
}
