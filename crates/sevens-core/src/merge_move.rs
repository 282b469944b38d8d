//! Merge move representation.

use std::fmt;

/// A move: merge the adjacent pair at `(left, left + 1)`.
///
/// Only the left index is stored; the right index is always `left + 1`.
/// A `Move` carries no reference to any particular sequence, so bounds
/// are checked where moves enter the system (move generation, match
/// validation), not by the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    left: usize,
}

impl Move {
    /// Create a move merging the pair at `(left, left + 1)`.
    #[inline]
    pub const fn new(left: usize) -> Move {
        Move { left }
    }

    /// Build a move from two indices picked in either order.
    ///
    /// Returns `None` unless the indices are adjacent. Front ends that
    /// collect two separate clicks translate them through this.
    pub fn from_pair(first: usize, second: usize) -> Option<Move> {
        let (lo, hi) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        // `hi >= lo`, so the difference never underflows.
        if hi - lo == 1 {
            Some(Move::new(lo))
        } else {
            None
        }
    }

    /// The left index of the merged pair.
    #[inline]
    pub const fn left(self) -> usize {
        self.left
    }

    /// The right index of the merged pair (`left + 1`).
    #[inline]
    pub const fn right(self) -> usize {
        self.left + 1
    }

    /// Return `true` if both indices fit a sequence of length `len`.
    #[inline]
    pub const fn in_bounds(self, len: usize) -> bool {
        // `self.right()` could overflow: the left index is arbitrary here.
        self.left < len.saturating_sub(1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.left(), self.right())
    }
}
