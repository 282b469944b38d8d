//! Merge execution via copy-make, and the scoring rule behind it.

use crate::merge_move::Move;
use crate::state::GameState;

/// The pivot sum: merges are scored by comparing the pair's sum against it.
pub const PIVOT_SUM: u8 = 7;

/// Effect of merging one adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Digit written where the pair stood.
    pub replacement: u8,
    /// Score delta for the seat making the move.
    pub actor_delta: i32,
    /// Score delta for the other seat.
    pub opponent_delta: i32,
}

/// Compute the outcome of merging two digits.
///
/// Both digits must be in 1..=9, the only values a sequence ever holds
/// (debug-asserted). With `s = first + second`:
///
/// - `s > 7`: replacement 1, the actor gains a point.
/// - `s < 7`: replacement 3, the *opponent* loses a point. Note the
///   asymmetry: a low merge damages the other seat rather than rewarding
///   the actor.
/// - `s == 7`: replacement 2, the actor loses a point.
pub const fn merge_outcome(first: u8, second: u8) -> MergeOutcome {
    debug_assert!(
        1 <= first && first <= 9 && 1 <= second && second <= 9,
        "merge digits must be in 1..=9"
    );
    let sum = first + second;
    if sum > PIVOT_SUM {
        MergeOutcome {
            replacement: 1,
            actor_delta: 1,
            opponent_delta: 0,
        }
    } else if sum < PIVOT_SUM {
        MergeOutcome {
            replacement: 3,
            actor_delta: 0,
            opponent_delta: -1,
        }
    } else {
        MergeOutcome {
            replacement: 2,
            actor_delta: -1,
            opponent_delta: 0,
        }
    }
}

impl GameState {
    /// Apply a merge move and return the resulting state. Copy-make: `self`
    /// is not modified.
    ///
    /// The pair at `mv.left()` / `mv.right()` is replaced by the merge
    /// digit, the score deltas are credited with the current `turn` as the
    /// acting seat, and the turn flips. The sequence shrinks by exactly one.
    ///
    /// The move must be in bounds for this state; callers obtain moves from
    /// move generation or controller validation.
    pub fn apply(&self, mv: Move) -> GameState {
        debug_assert!(
            mv.in_bounds(self.len()),
            "merge at {} out of bounds for length {}",
            mv.left(),
            self.len()
        );

        let digits = self.digits();
        let outcome = merge_outcome(digits[mv.left()], digits[mv.right()]);

        let mut next_digits = Vec::with_capacity(digits.len() - 1);
        next_digits.extend_from_slice(&digits[..mv.left()]);
        next_digits.push(outcome.replacement);
        next_digits.extend_from_slice(&digits[mv.right() + 1..]);

        let actor = self.turn();
        let mut scores = self.scores();
        scores[actor.index()] += outcome.actor_delta;
        scores[actor.flip().index()] += outcome.opponent_delta;

        GameState::from_raw(next_digits, scores, actor.flip())
    }
}

#[cfg(test)]
mod tests {
    use super::{MergeOutcome, merge_outcome};
    use crate::merge_move::Move;
    use crate::seat::Seat;
    use crate::state::{GameState, Outcome};

    #[test]
    fn high_sum_rewards_actor() {
        assert_eq!(
            merge_outcome(5, 5),
            MergeOutcome {
                replacement: 1,
                actor_delta: 1,
                opponent_delta: 0,
            }
        );
        assert_eq!(merge_outcome(9, 9).replacement, 1);
        // Boundary: 8 is the smallest high sum.
        assert_eq!(merge_outcome(4, 4).actor_delta, 1);
    }

    #[test]
    fn low_sum_harms_opponent() {
        assert_eq!(
            merge_outcome(1, 1),
            MergeOutcome {
                replacement: 3,
                actor_delta: 0,
                opponent_delta: -1,
            }
        );
        // Boundary: 6 is the largest low sum.
        assert_eq!(merge_outcome(2, 4).opponent_delta, -1);
    }

    #[test]
    fn exact_pivot_costs_actor() {
        assert_eq!(
            merge_outcome(3, 4),
            MergeOutcome {
                replacement: 2,
                actor_delta: -1,
                opponent_delta: 0,
            }
        );
        assert_eq!(merge_outcome(6, 1), merge_outcome(1, 6));
    }

    #[test]
    fn apply_high_merge() {
        // [5, 5], a to move: sum 10 > 7, so a scores and a single 1 remains.
        let state = GameState::from_digits(vec![5, 5], Seat::A).unwrap();
        let after = state.apply(Move::new(0));

        assert_eq!(after.digits(), &[1]);
        assert_eq!(after.score(Seat::A), 1);
        assert_eq!(after.score(Seat::B), 0);
        assert_eq!(after.turn(), Seat::B);
        assert_eq!(after.outcome(), Some(Outcome::Win(Seat::A)));
    }

    #[test]
    fn apply_pivot_merge() {
        // [3, 4], a to move: sum is exactly 7, so a pays and b wins.
        let state = GameState::from_digits(vec![3, 4], Seat::A).unwrap();
        let after = state.apply(Move::new(0));

        assert_eq!(after.digits(), &[2]);
        assert_eq!(after.score(Seat::A), -1);
        assert_eq!(after.score(Seat::B), 0);
        assert_eq!(after.outcome(), Some(Outcome::Win(Seat::B)));
    }

    #[test]
    fn apply_low_merge() {
        // [1, 1], a to move: sum 2 < 7 hits the *opponent*, so a wins.
        let state = GameState::from_digits(vec![1, 1], Seat::A).unwrap();
        let after = state.apply(Move::new(0));

        assert_eq!(after.digits(), &[3]);
        assert_eq!(after.score(Seat::A), 0);
        assert_eq!(after.score(Seat::B), -1);
        assert_eq!(after.outcome(), Some(Outcome::Win(Seat::A)));
    }

    #[test]
    fn apply_splices_middle_pair() {
        let state = GameState::from_digits(vec![9, 2, 4, 1, 1], Seat::B).unwrap();
        let after = state.apply(Move::new(1));

        // 2 + 4 < 7: replaced by 3, a (the opponent of b) drops a point.
        assert_eq!(after.digits(), &[9, 3, 1, 1]);
        assert_eq!(after.score(Seat::A), -1);
        assert_eq!(after.score(Seat::B), 0);
        assert_eq!(after.turn(), Seat::A);
    }

    #[test]
    fn apply_shrinks_by_one_everywhere() {
        let state = GameState::from_digits(vec![7, 3, 8, 2, 6, 1], Seat::A).unwrap();
        for left in 0..state.len() - 1 {
            let after = state.apply(Move::new(left));
            assert_eq!(after.len(), state.len() - 1, "merge at {left}");
            assert_eq!(after.turn(), Seat::B);
        }
    }

    #[test]
    fn apply_leaves_original_untouched() {
        let state = GameState::from_digits(vec![5, 5, 5], Seat::A).unwrap();
        let _ = state.apply(Move::new(0));
        assert_eq!(state.digits(), &[5, 5, 5]);
        assert_eq!(state.score(Seat::A), 0);
        assert_eq!(state.turn(), Seat::A);
    }

    #[test]
    fn alternating_merges_accumulate_scores() {
        // [9, 9, 1]: a merges 9+9 (+1 for a), then b merges 1+1 (-1 for a).
        let state = GameState::from_digits(vec![9, 9, 1], Seat::A).unwrap();
        let mid = state.apply(Move::new(0));
        assert_eq!(mid.digits(), &[1, 1]);

        let end = mid.apply(Move::new(0));
        assert_eq!(end.digits(), &[3]);
        assert_eq!(end.score(Seat::A), 0); // +1 then -1
        assert_eq!(end.score(Seat::B), 0);
        assert_eq!(end.outcome(), Some(Outcome::Tie));
    }

    #[test]
    fn replacement_digits_stay_in_range() {
        for first in 1..=9u8 {
            for second in 1..=9u8 {
                let outcome = merge_outcome(first, second);
                assert!((1..=3).contains(&outcome.replacement));
            }
        }
    }

    #[test]
    #[should_panic(expected = "merge digits must be in 1..=9")]
    #[cfg(debug_assertions)]
    fn panics_on_out_of_range_digits() {
        let _ = merge_outcome(200, 56);
    }
}
