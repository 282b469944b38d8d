//! Notation parsing and serialization for [`GameState`].
//!
//! The notation is four whitespace-separated fields: the digit run, the
//! seat to move, then both scores. `"92411 a 0 0"` is a fresh five-digit
//! game with `a` to move.

use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;
use crate::seat::Seat;
use crate::state::GameState;

impl FromStr for GameState {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<GameState, NotationError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(NotationError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Digit run. Every element is a single character 1-9, so the run
        // needs no separators.
        let mut digits = Vec::with_capacity(fields[0].len());
        for c in fields[0].chars() {
            match c.to_digit(10) {
                Some(d @ 1..=9) => digits.push(d as u8),
                _ => return Err(NotationError::InvalidDigitChar { character: c }),
            }
        }

        // Seat to move.
        let turn = match fields[1] {
            "a" => Seat::A,
            "b" => Seat::B,
            other => {
                return Err(NotationError::InvalidSeat {
                    found: other.to_string(),
                });
            }
        };

        // Scores.
        let score_a = fields[2]
            .parse::<i32>()
            .map_err(|_| NotationError::InvalidScore {
                field: "seat a score",
                found: fields[2].to_string(),
            })?;
        let score_b = fields[3]
            .parse::<i32>()
            .map_err(|_| NotationError::InvalidScore {
                field: "seat b score",
                found: fields[3].to_string(),
            })?;

        let state = GameState::from_parts(digits, [score_a, score_b], turn)?;
        Ok(state)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        write!(
            f,
            " {} {} {}",
            self.turn(),
            self.score(Seat::A),
            self.score(Seat::B)
        )
    }
}
