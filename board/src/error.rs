//! Typed board validation errors.
//!
//! Validation happens once, at construction. A `Board` value that exists is
//! a valid permutation, so the search loops downstream carry no validation
//! paths of their own.

use std::fmt;

/// Why an input failed to become a [`Board`](crate::state::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Input is not exactly one label per grid cell.
    WrongLength { expected: usize, actual: usize },
    /// A character that is not a tile label.
    InvalidCharacter { character: char },
    /// A numeric label outside the grid's label range.
    LabelOutOfRange { label: u8 },
    /// A label appears more than once. A missing blank always shows up as
    /// some other label duplicated.
    DuplicateLabel { label: u8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} tiles, got {actual}")
            }
            Self::InvalidCharacter { character } => {
                write!(f, "'{character}' is not a tile label")
            }
            Self::LabelOutOfRange { label } => {
                write!(f, "tile label {label} is outside the grid range")
            }
            Self::DuplicateLabel { label } => {
                write!(f, "tile label {label} appears more than once")
            }
        }
    }
}

impl std::error::Error for BoardError {}
