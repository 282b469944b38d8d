//! Minimax with alpha-beta pruning.

use sevens_core::{GameState, generate_moves};

use super::{INF, SearchContext};

/// Depth-limited alpha-beta value of `state`.
///
/// Agrees with plain minimax on every node value: `(alpha, beta)` only
/// bounds which siblings still need visiting. Once `beta <= alpha` the
/// remaining children cannot change the value and the loop stops.
pub(super) fn alphabeta(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || state.is_terminal() {
        return ctx.evaluate(state);
    }

    if maximizing {
        let mut best = -INF;
        for mv in generate_moves(state) {
            let child = state.apply(mv);
            best = best.max(alphabeta(&child, depth - 1, alpha, beta, false, ctx));
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for mv in generate_moves(state) {
            let child = state.apply(mv);
            best = best.min(alphabeta(&child, depth - 1, alpha, beta, true, ctx));
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
