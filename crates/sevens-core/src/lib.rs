//! Core game types: seats, sequence state, merge rules, move generation,
//! and notation.

mod error;
mod merge_move;
mod movegen;
mod notation;
mod rules;
mod seat;
mod state;

pub use error::{NotationError, StateError};
pub use merge_move::Move;
pub use movegen::generate_moves;
pub use rules::{MergeOutcome, PIVOT_SUM, merge_outcome};
pub use seat::Seat;
pub use state::{GameState, Outcome, PrettyState};
