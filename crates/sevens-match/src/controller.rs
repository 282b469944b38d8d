//! The match state machine.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use sevens_core::{GameState, Move, Outcome};
use sevens_engine::{SearchResult, find_best_move};

use crate::config::{MatchConfig, Operator};
use crate::error::{EngineError, MoveError};

/// Whose input the controller is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A human seat is to move; feed it via [`MatchController::submit`] or
    /// the selection flow.
    AwaitingHuman,
    /// An engine seat is to move; call
    /// [`MatchController::compute_engine_move`].
    AwaitingEngine,
    /// The sequence is down to one digit; no further moves exist.
    Over,
}

/// What one selection step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The index became the pending half of a merge.
    Picked(usize),
    /// The pending index was deselected.
    Cleared,
    /// A second, adjacent index completed the merge and it was played.
    Played(Move),
}

/// Drives one match over the authoritative [`GameState`].
///
/// The controller owns the only mutable view of the game: humans feed it
/// moves, engine turns are computed on request, and every transition
/// re-derives the phase from the new state.
pub struct MatchController {
    config: MatchConfig,
    state: GameState,
    phase: Phase,
    /// Pending first half of a two-click merge selection. Explicitly `None`
    /// when nothing is selected.
    selected: Option<usize>,
}

impl MatchController {
    /// Start a match with entropy-backed starting digits.
    pub fn new(config: MatchConfig) -> MatchController {
        let state = GameState::random(config.length(), config.first(), &mut rand::rng())
            .expect("validated length is never zero");
        MatchController::from_state(config, state)
    }

    /// Start a reproducible match from a seed.
    pub fn with_seed(config: MatchConfig, seed: u64) -> MatchController {
        let mut rng = SmallRng::seed_from_u64(seed);
        let state = GameState::random(config.length(), config.first(), &mut rng)
            .expect("validated length is never zero");
        MatchController::from_state(config, state)
    }

    /// Adopt a prepared state, deriving the initial phase from it.
    ///
    /// A terminal state starts the match in [`Phase::Over`], which covers a
    /// length-1 start. `config.length()` only governs generated starts and
    /// is ignored here.
    pub fn from_state(config: MatchConfig, state: GameState) -> MatchController {
        let phase = MatchController::phase_for(&config, &state);
        let controller = MatchController {
            config,
            state,
            phase,
            selected: None,
        };
        debug!(state = %controller.state, phase = ?controller.phase, "match ready");
        controller
    }

    fn phase_for(config: &MatchConfig, state: &GameState) -> Phase {
        if state.is_terminal() {
            Phase::Over
        } else {
            match config.operator(state.turn()) {
                Operator::Human => Phase::AwaitingHuman,
                Operator::Engine => Phase::AwaitingEngine,
            }
        }
    }

    /// The current game state.
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The pending selection, if any.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Return `true` once no further moves exist.
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over)
    }

    /// The final outcome, or `None` while the match is running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Submit a human move.
    ///
    /// On success the merge is applied, any pending selection is dropped,
    /// and the new state is returned. Failed submissions leave the match
    /// untouched.
    pub fn submit(&mut self, mv: Move) -> Result<&GameState, MoveError> {
        match self.phase {
            Phase::Over => return Err(MoveError::Over),
            Phase::AwaitingEngine => return Err(MoveError::EngineTurn),
            Phase::AwaitingHuman => {}
        }
        if !mv.in_bounds(self.state.len()) {
            // Saturating form of `right()`: submitted moves carry arbitrary indices.
            return Err(MoveError::OutOfRange {
                index: mv.left().saturating_add(1),
                len: self.state.len(),
            });
        }
        self.advance(mv);
        Ok(&self.state)
    }

    /// Advance the two-click selection flow with a clicked slot index.
    ///
    /// The first valid index becomes the pending selection; clicking it
    /// again clears it; clicking an adjacent slot plays the merge. A
    /// non-adjacent second click reports the pair and resets the selection.
    /// An out-of-range click changes nothing, pending selection included.
    pub fn select(&mut self, index: usize) -> Result<Selection, MoveError> {
        match self.phase {
            Phase::Over => return Err(MoveError::Over),
            Phase::AwaitingEngine => return Err(MoveError::EngineTurn),
            Phase::AwaitingHuman => {}
        }
        if index >= self.state.len() {
            return Err(MoveError::OutOfRange {
                index,
                len: self.state.len(),
            });
        }
        match self.selected {
            None => {
                self.selected = Some(index);
                Ok(Selection::Picked(index))
            }
            Some(first) if first == index => {
                self.selected = None;
                Ok(Selection::Cleared)
            }
            Some(first) => match Move::from_pair(first, index) {
                Some(mv) => {
                    self.advance(mv);
                    Ok(Selection::Played(mv))
                }
                None => {
                    self.selected = None;
                    Err(MoveError::NotAdjacent {
                        first,
                        second: index,
                    })
                }
            },
        }
    }

    /// Drop any pending selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Compute and play the engine's move, returning the search report.
    pub fn compute_engine_move(&mut self) -> Result<SearchResult, EngineError> {
        match self.phase {
            Phase::Over => return Err(EngineError::Over),
            Phase::AwaitingHuman => return Err(EngineError::HumanTurn),
            Phase::AwaitingEngine => {}
        }
        let result = find_best_move(&self.state, &self.config.search())?;
        self.advance(result.best_move);
        Ok(result)
    }

    /// Apply a validated move and re-derive the phase.
    fn advance(&mut self, mv: Move) {
        let actor = self.state.turn();
        self.state = self.state.apply(mv);
        self.selected = None;
        self.phase = MatchController::phase_for(&self.config, &self.state);
        debug!(seat = %actor, mv = %mv, state = %self.state, "move applied");
        if let Some(outcome) = self.state.outcome() {
            info!(?outcome, "match over");
        }
    }
}
