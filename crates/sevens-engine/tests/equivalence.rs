//! Integration tests for search algorithm agreement.
//!
//! Minimax and alpha-beta must pick identical best moves and values on
//! every position and depth; pruning may only reduce the node count.

use sevens_core::{GameState, Move};
use sevens_engine::{Algorithm, Heuristic, SearchConfig, find_best_move};

const FRESH_FIVE: &str = "92411 a 0 0";
const MIDGAME: &str = "3193 b -2 1";
const LONG_DESCENDING: &str = "987654321 a 0 0";
const ALL_FOURS: &str = "444444 b 3 3";

fn config(algorithm: Algorithm, depth: u8, length_penalty: bool) -> SearchConfig {
    SearchConfig::new(algorithm, depth, Heuristic { length_penalty }).unwrap()
}

// ── Algorithm agreement ───────────────────────────────────────────────────────

#[test]
fn identical_choice_across_positions_and_depths() {
    let positions = [FRESH_FIVE, MIDGAME, LONG_DESCENDING, ALL_FOURS];

    for notation in positions {
        let state: GameState = notation.parse().unwrap();
        for depth in 1..=4 {
            for length_penalty in [false, true] {
                let mm =
                    find_best_move(&state, &config(Algorithm::Minimax, depth, length_penalty))
                        .unwrap();
                let ab =
                    find_best_move(&state, &config(Algorithm::AlphaBeta, depth, length_penalty))
                        .unwrap();

                assert_eq!(
                    mm.best_move, ab.best_move,
                    "best move diverged on {notation} at depth {depth}"
                );
                assert_eq!(
                    mm.value, ab.value,
                    "value diverged on {notation} at depth {depth}"
                );
                assert!(
                    ab.nodes <= mm.nodes,
                    "alpha-beta visited {} nodes, minimax {} on {notation} at depth {depth}",
                    ab.nodes,
                    mm.nodes
                );
            }
        }
    }
}

#[test]
fn tie_break_is_shared() {
    // Both merges of [9, 9, 1] are worth the same at depth 1; both
    // algorithms must settle on the first.
    let state: GameState = "991 a 0 0".parse().unwrap();
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let result = find_best_move(&state, &config(algorithm, 1, true)).unwrap();
        assert_eq!(result.best_move, Move::new(0));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn repeated_searches_are_identical() {
    let state: GameState = FRESH_FIVE.parse().unwrap();
    let cfg = config(Algorithm::AlphaBeta, 4, true);

    let first = find_best_move(&state, &cfg).unwrap();
    let second = find_best_move(&state, &cfg).unwrap();

    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.value, second.value);
    assert_eq!(first.nodes, second.nodes);
}

// ── Self-play ─────────────────────────────────────────────────────────────────

#[test]
fn self_play_runs_to_a_single_digit() {
    let mut state: GameState = LONG_DESCENDING.parse().unwrap();
    let cfg = config(Algorithm::AlphaBeta, 3, true);
    let mut plies = 0;

    while !state.is_terminal() {
        let result = find_best_move(&state, &cfg).unwrap();
        state = state.apply(result.best_move);
        plies += 1;
    }

    // Every merge removes one digit, so a 9-digit game is exactly 8 plies.
    assert_eq!(plies, 8);
    assert_eq!(state.len(), 1);
    assert!(state.outcome().is_some());
}
