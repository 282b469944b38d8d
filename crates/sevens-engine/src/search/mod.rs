//! Depth-limited adversarial search.

mod alphabeta;
mod minimax;

use std::time::{Duration, Instant};

use tracing::debug;

use sevens_core::{GameState, Move, Seat, generate_moves};

use crate::error::SearchError;
use crate::eval::Heuristic;

use alphabeta::alphabeta;
use minimax::minimax;

/// Value bound no reachable evaluation can attain.
pub(crate) const INF: i32 = 1_000_000;

/// Which tree walk scores the root children.
///
/// Both walks agree on every value; [`Algorithm::AlphaBeta`] merely prunes
/// subtrees that cannot change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Exhaustive minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

/// Search parameters, fixed for the duration of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    algorithm: Algorithm,
    max_depth: u8,
    heuristic: Heuristic,
}

impl SearchConfig {
    /// Create a search configuration.
    ///
    /// # Errors
    ///
    /// [`SearchError::ZeroDepth`] if `max_depth` is 0: a zero-ply search
    /// could only evaluate the root, never choose among its moves.
    pub fn new(
        algorithm: Algorithm,
        max_depth: u8,
        heuristic: Heuristic,
    ) -> Result<SearchConfig, SearchError> {
        if max_depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        Ok(SearchConfig {
            algorithm,
            max_depth,
            heuristic,
        })
    }

    /// The tree walk in use.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The depth limit in plies. Always at least 1.
    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// The leaf evaluator.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found at the root.
    pub best_move: Move,
    /// Value of `best_move` in decipoints, from the searching seat's
    /// perspective.
    pub value: i32,
    /// Total nodes visited.
    pub nodes: u64,
    /// Wall-clock duration of the search.
    pub elapsed: Duration,
    /// Depth limit the search ran with.
    pub depth: u8,
}

/// Search state threaded through recursive calls.
struct SearchContext {
    /// Leaf evaluator.
    heuristic: Heuristic,
    /// Seat whose advantage is maximized; fixed for the whole search.
    perspective: Seat,
    /// Total nodes visited so far.
    nodes: u64,
}

impl SearchContext {
    /// Evaluate a node where descent stops.
    #[inline]
    fn evaluate(&self, state: &GameState) -> i32 {
        self.heuristic.score(state, self.perspective)
    }
}

/// Find the best move for the seat to move in `state`.
///
/// Each root child is scored at `max_depth - 1` plies with the opponent
/// minimizing next; values are taken from the fixed perspective of
/// `state.turn()`. A strictly-greater comparison picks the winner, so equal
/// values resolve to the lowest left index. Alpha-beta scores every root
/// child with a fresh full window, which keeps the two algorithms
/// move-for-move and value-for-value identical at the root.
///
/// # Errors
///
/// [`SearchError::TerminalPosition`] if `state` has no moves left.
pub fn find_best_move(
    state: &GameState,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    if state.is_terminal() {
        return Err(SearchError::TerminalPosition);
    }

    let start = Instant::now();
    let mut ctx = SearchContext {
        heuristic: config.heuristic(),
        perspective: state.turn(),
        nodes: 0,
    };

    let child_depth = config.max_depth() - 1;
    let moves = generate_moves(state);
    let mut best_move = moves[0];
    let mut best_value = -INF;

    for mv in moves {
        let child = state.apply(mv);
        let value = match config.algorithm() {
            Algorithm::Minimax => minimax(&child, child_depth, false, &mut ctx),
            Algorithm::AlphaBeta => alphabeta(&child, child_depth, -INF, INF, false, &mut ctx),
        };
        if value > best_value {
            best_value = value;
            best_move = mv;
        }
    }

    let result = SearchResult {
        best_move,
        value: best_value,
        nodes: ctx.nodes,
        elapsed: start.elapsed(),
        depth: config.max_depth(),
    };

    debug!(
        algorithm = ?config.algorithm(),
        depth = result.depth,
        nodes = result.nodes,
        elapsed_ms = result.elapsed.as_millis() as u64,
        value = result.value,
        best = %result.best_move,
        "search complete"
    );

    Ok(result)
}
