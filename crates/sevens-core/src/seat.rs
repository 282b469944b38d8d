//! The two competing seats.

use std::fmt;
use std::ops::Not;

/// A seat in the match: A or B.
///
/// Seats are symmetric; whether a seat is driven by a human or by the
/// engine is a policy of the match layer, not of the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    A = 0,
    B = 1,
}

impl Seat {
    /// Total number of seats.
    pub const COUNT: usize = 2;

    /// All seats in index order.
    pub const ALL: [Seat; 2] = [Seat::A, Seat::B];

    /// Return the index (0 for A, 1 for B).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing seat.
    #[inline]
    pub const fn flip(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

impl Not for Seat {
    type Output = Seat;

    #[inline]
    fn not(self) -> Seat {
        self.flip()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::A => write!(f, "a"),
            Seat::B => write!(f, "b"),
        }
    }
}
