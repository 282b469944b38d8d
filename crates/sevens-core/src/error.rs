//! Error types for notation parsing and state validation.

use std::fmt;

/// Errors that occur when parsing a state notation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The notation does not have exactly 4 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// A character outside '1'..='9' appeared in the digit run.
    InvalidDigitChar {
        /// The invalid character.
        character: char,
    },
    /// The turn field is not "a" or "b".
    InvalidSeat {
        /// The invalid seat string.
        found: String,
    },
    /// A score field is not a valid signed integer.
    InvalidScore {
        /// The field name ("seat a score" or "seat b score").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed fields fail structural validation.
    InvalidState {
        /// The underlying state validation error.
        source: StateError,
    },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongFieldCount { found } => {
                write!(f, "expected 4 notation fields, found {found}")
            }
            NotationError::InvalidDigitChar { character } => {
                write!(f, "invalid digit character: '{character}'")
            }
            NotationError::InvalidSeat { found } => {
                write!(f, "invalid turn seat: \"{found}\"")
            }
            NotationError::InvalidScore { field, found } => {
                write!(f, "invalid {field}: \"{found}\"")
            }
            NotationError::InvalidState { source } => {
                write!(f, "invalid state: {source}")
            }
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::InvalidState { source } => Some(source),
            _ => None,
        }
    }
}

impl From<StateError> for NotationError {
    fn from(source: StateError) -> Self {
        NotationError::InvalidState { source }
    }
}

/// Errors from structural validation of a [`GameState`](crate::state::GameState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The digit sequence is empty; a state always holds at least one digit.
    #[error("digit sequence must not be empty")]
    EmptySequence,
    /// A digit lies outside the playable range 1..=9.
    #[error("digit {value} at index {index} is outside 1..=9")]
    DigitOutOfRange {
        /// Index of the offending digit.
        index: usize,
        /// The offending value.
        value: u8,
    },
}
