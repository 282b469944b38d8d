//! The game state: digit sequence, per-seat scores, and the seat to move.

use std::cmp::Ordering;
use std::fmt;

use rand::Rng;

use crate::error::StateError;
use crate::seat::Seat;

/// Complete game state.
///
/// A state is an immutable value: applying a move produces a fresh
/// `GameState` and never touches the original, so search branches can
/// share ancestors freely.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    /// The digit sequence. Every element is in 1..=9: initial draws are
    /// uniform in 1..=9 and merge replacements are 1, 2, or 3.
    digits: Vec<u8>,
    /// Accumulated score for each seat, indexed by [`Seat::index()`].
    scores: [i32; Seat::COUNT],
    /// Which seat moves next.
    turn: Seat,
}

/// Result of a finished game: a winning seat or a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given seat holds the strictly higher score.
    Win(Seat),
    /// Both seats finished on the same score.
    Tie,
}

impl GameState {
    /// Create a state from a digit sequence with zero scores.
    pub fn from_digits(digits: Vec<u8>, turn: Seat) -> Result<GameState, StateError> {
        GameState::from_parts(digits, [0; Seat::COUNT], turn)
    }

    /// Create a state from all components, validating the digit sequence.
    pub fn from_parts(
        digits: Vec<u8>,
        scores: [i32; Seat::COUNT],
        turn: Seat,
    ) -> Result<GameState, StateError> {
        if digits.is_empty() {
            return Err(StateError::EmptySequence);
        }
        for (index, &value) in digits.iter().enumerate() {
            if !(1..=9).contains(&value) {
                return Err(StateError::DigitOutOfRange { index, value });
            }
        }
        Ok(GameState {
            digits,
            scores,
            turn,
        })
    }

    /// Create a starting state with `length` uniform random digits in 1..=9.
    pub fn random<R: Rng + ?Sized>(
        length: usize,
        turn: Seat,
        rng: &mut R,
    ) -> Result<GameState, StateError> {
        if length == 0 {
            return Err(StateError::EmptySequence);
        }
        let digits: Vec<u8> = (0..length).map(|_| rng.random_range(1..=9)).collect();
        Ok(GameState {
            digits,
            scores: [0; Seat::COUNT],
            turn,
        })
    }

    /// Construct a state from pre-validated components. Used by move application.
    pub(crate) fn from_raw(digits: Vec<u8>, scores: [i32; Seat::COUNT], turn: Seat) -> GameState {
        GameState {
            digits,
            scores,
            turn,
        }
    }

    /// Return the digit sequence.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Return the digit at `index`. Panics if out of bounds.
    #[inline]
    pub fn digit(&self, index: usize) -> u8 {
        self.digits[index]
    }

    /// Return the number of digits remaining.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Return the score of the given seat.
    #[inline]
    pub fn score(&self, seat: Seat) -> i32 {
        self.scores[seat.index()]
    }

    /// Return the score array, indexed by seat. Used by move application.
    #[inline]
    pub(crate) fn scores(&self) -> [i32; Seat::COUNT] {
        self.scores
    }

    /// Return `seat`'s score minus the opponent's.
    #[inline]
    pub fn score_diff(&self, seat: Seat) -> i32 {
        self.scores[seat.index()] - self.scores[seat.flip().index()]
    }

    /// Return the seat to move.
    #[inline]
    pub fn turn(&self) -> Seat {
        self.turn
    }

    /// Return `true` if the sequence has been reduced to a single digit.
    ///
    /// A terminal state has no legal moves; its [`outcome`](Self::outcome)
    /// is decided by score comparison.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.digits.len() == 1
    }

    /// Return the game's outcome, or `None` while moves remain.
    ///
    /// The strictly higher score wins; equal scores tie. This is a pure
    /// function of the state; nothing about the result is stored.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }
        let a = self.scores[Seat::A.index()];
        let b = self.scores[Seat::B.index()];
        Some(match a.cmp(&b) {
            Ordering::Greater => Outcome::Win(Seat::A),
            Ordering::Less => Outcome::Win(Seat::B),
            Ordering::Equal => Outcome::Tie,
        })
    }

    /// Return a pretty-printable wrapper for this state.
    pub fn pretty(&self) -> PrettyState<'_> {
        PrettyState(self)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display renders the state notation, which is compact and unambiguous.
        write!(f, "GameState(\"{self}\")")
    }
}

/// Wrapper for pretty-printing a state as a one-line summary.
pub struct PrettyState<'a>(&'a GameState);

impl fmt::Display for PrettyState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        write!(f, "[")?;
        for (i, digit) in state.digits.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{digit}")?;
        }
        write!(
            f,
            "] a: {}  b: {}",
            state.score(Seat::A),
            state.score(Seat::B)
        )?;
        if state.is_terminal() {
            write!(f, "  (over)")
        } else {
            write!(f, "  ({} to move)", state.turn)
        }
    }
}
