//! Search errors.

/// Errors from search configuration and invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A zero depth limit would evaluate the root without choosing a move.
    #[error("search depth must be at least 1")]
    ZeroDepth,

    /// The position is already decided; there is no move to find.
    #[error("cannot search a terminal position")]
    TerminalPosition,
}
