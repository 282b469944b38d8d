//! Legal move generation.

use crate::merge_move::Move;
use crate::state::GameState;

/// Generate every legal merge for `state`, in ascending left-index order.
///
/// One move exists per adjacent pair, so a state of length `n` yields
/// `n - 1` moves and a terminal state yields none. The ascending order is
/// load-bearing: search resolves value ties toward the first generated
/// move, so this order is what makes play deterministic.
pub fn generate_moves(state: &GameState) -> Vec<Move> {
    (0..state.len() - 1).map(Move::new).collect()
}
