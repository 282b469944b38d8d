//! Leaf evaluation.
//!
//! Scores are integer decipoints: one game point is worth 10. Integer
//! arithmetic keeps comparisons exact while still expressing a fractional
//! length penalty (one decipoint per remaining digit).

use sevens_core::{GameState, Seat};

/// Leaf evaluator applied where the search stops descending.
///
/// Scores are always computed from one fixed `perspective` seat, no matter
/// which seat acts at the evaluated node. Maximizing and minimizing levels
/// of the search share this single orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristic {
    /// Subtract one decipoint per remaining digit, preferring lines that
    /// shorten the game when score differences tie.
    pub length_penalty: bool,
}

impl Heuristic {
    /// Score `state` from `perspective`, in decipoints.
    pub fn score(&self, state: &GameState, perspective: Seat) -> i32 {
        let diff = 10 * state.score_diff(perspective);
        if self.length_penalty {
            diff - state.len() as i32
        } else {
            diff
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic {
            length_penalty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use sevens_core::{GameState, Seat};

    use super::Heuristic;

    #[test]
    fn score_diff_in_decipoints() {
        let state = GameState::from_parts(vec![5, 5, 5], [3, 1], Seat::A).unwrap();
        let plain = Heuristic {
            length_penalty: false,
        };
        assert_eq!(plain.score(&state, Seat::A), 20);
        assert_eq!(plain.score(&state, Seat::B), -20);
    }

    #[test]
    fn length_penalty_subtracts_one_per_digit() {
        let state = GameState::from_parts(vec![5, 5, 5], [3, 1], Seat::A).unwrap();
        let penalized = Heuristic {
            length_penalty: true,
        };
        assert_eq!(penalized.score(&state, Seat::A), 17);
        assert_eq!(penalized.score(&state, Seat::B), -23);
    }

    #[test]
    fn penalty_breaks_equal_diff_toward_shorter() {
        let short = GameState::from_parts(vec![9], [2, 0], Seat::A).unwrap();
        let long = GameState::from_parts(vec![1, 2, 3, 4], [2, 0], Seat::A).unwrap();
        let heuristic = Heuristic::default();
        assert!(heuristic.score(&short, Seat::A) > heuristic.score(&long, Seat::A));
    }

    #[test]
    fn default_enables_penalty() {
        assert!(Heuristic::default().length_penalty);
    }
}
