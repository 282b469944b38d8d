//! Exhaustive minimax.

use sevens_core::{GameState, generate_moves};

use super::{INF, SearchContext};

/// Depth-limited minimax value of `state`.
///
/// `maximizing` says whether the seat acting at this node plays for the
/// search perspective. Descent stops at `depth == 0` or a terminal state,
/// where the heuristic decides.
pub(super) fn minimax(
    state: &GameState,
    depth: u8,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || state.is_terminal() {
        return ctx.evaluate(state);
    }

    let mut best = if maximizing { -INF } else { INF };
    for mv in generate_moves(state) {
        let child = state.apply(mv);
        let value = minimax(&child, depth - 1, !maximizing, ctx);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use sevens_core::{GameState, Seat};

    use super::minimax;
    use crate::eval::Heuristic;
    use crate::search::SearchContext;

    fn fresh_ctx(perspective: Seat) -> SearchContext {
        SearchContext {
            heuristic: Heuristic::default(),
            perspective,
            nodes: 0,
        }
    }

    #[test]
    fn depth_zero_evaluates_leaf() {
        let state: GameState = "91 a 2 0".parse().unwrap();
        let mut ctx = fresh_ctx(Seat::A);
        assert_eq!(minimax(&state, 0, true, &mut ctx), 18);
        assert_eq!(ctx.nodes, 1);
    }

    #[test]
    fn terminal_state_evaluates_before_depth_runs_out() {
        let state: GameState = "5 b 0 1".parse().unwrap();
        let mut ctx = fresh_ctx(Seat::B);
        assert_eq!(minimax(&state, 4, true, &mut ctx), 9);
        assert_eq!(ctx.nodes, 1);
    }

    #[test]
    fn maximizing_takes_larger_child() {
        // [3, 4, 9], a acting: children evaluate to -12 and 8 for a.
        let state: GameState = "349 a 0 0".parse().unwrap();
        let mut ctx = fresh_ctx(Seat::A);
        assert_eq!(minimax(&state, 1, true, &mut ctx), 8);
    }

    #[test]
    fn minimizing_takes_smaller_child() {
        // Same pair of merges made by b, still valued from a's perspective:
        // the pivot merge costs b a point (eval 8 for a) and the high merge
        // gains b one (eval -12 for a). The minimizer takes -12.
        let state: GameState = "349 b 0 0".parse().unwrap();
        let mut ctx = fresh_ctx(Seat::A);
        assert_eq!(minimax(&state, 1, false, &mut ctx), -12);
    }

    #[test]
    fn counts_every_entered_node() {
        // [3, 4, 9] at depth 2: one root entry, two depth-1 entries, one
        // leaf below each.
        let state: GameState = "349 a 0 0".parse().unwrap();
        let mut ctx = fresh_ctx(Seat::A);
        minimax(&state, 2, true, &mut ctx);
        assert_eq!(ctx.nodes, 5);
    }
}
