//! Match orchestration errors.

use sevens_engine::SearchError;

/// Errors from match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A match needs at least one starting digit.
    #[error("starting length must be at least 1")]
    ZeroLength,
}

/// Errors from feeding the controller a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The match already finished.
    #[error("the match is over")]
    Over,

    /// The seat to move is operated by the engine.
    #[error("an engine seat is to move")]
    EngineTurn,

    /// The index does not name a slot of the current sequence.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The offending slot index.
        index: usize,
        /// Current sequence length.
        len: usize,
    },

    /// Two selected slots do not sit next to each other.
    #[error("slots {first} and {second} are not adjacent")]
    NotAdjacent {
        /// The slot selected first.
        first: usize,
        /// The slot selected second.
        second: usize,
    },
}

/// Errors from requesting an engine move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The match already finished.
    #[error("the match is over")]
    Over,

    /// The seat to move is operated by a human.
    #[error("a human seat is to move")]
    HumanTurn,

    /// The underlying search rejected the request.
    #[error("search failed: {source}")]
    Search {
        /// The search error.
        #[from]
        source: SearchError,
    },
}
