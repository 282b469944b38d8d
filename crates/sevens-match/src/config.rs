//! Match configuration.

use sevens_core::Seat;
use sevens_engine::SearchConfig;

use crate::error::ConfigError;

/// Smallest starting length front ends conventionally offer.
pub const CLASSIC_MIN_LENGTH: usize = 15;

/// Largest starting length front ends conventionally offer.
pub const CLASSIC_MAX_LENGTH: usize = 25;

/// Who supplies moves for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Moves arrive from outside, through [`crate::MatchController::submit`]
    /// or the selection flow.
    Human,
    /// Moves are computed by the search engine.
    Engine,
}

/// Parameters of one match.
///
/// Seats are symmetric: any pairing of operators is valid, including both
/// humans or both engines. Only the controller consults the operator table,
/// so the rules never know which seat is automated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    length: usize,
    first: Seat,
    operators: [Operator; Seat::COUNT],
    search: SearchConfig,
}

impl MatchConfig {
    /// Create a match configuration.
    ///
    /// Any positive `length` is accepted; the classic 15 to 25 range is a
    /// presentation convention, published as [`CLASSIC_MIN_LENGTH`] and
    /// [`CLASSIC_MAX_LENGTH`] for front ends to enforce.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroLength`] if `length` is 0.
    pub fn new(
        length: usize,
        first: Seat,
        operators: [Operator; Seat::COUNT],
        search: SearchConfig,
    ) -> Result<MatchConfig, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        Ok(MatchConfig {
            length,
            first,
            operators,
            search,
        })
    }

    /// A match where `human` plays the engine, with `first` to move.
    pub fn human_vs_engine(
        length: usize,
        human: Seat,
        first: Seat,
        search: SearchConfig,
    ) -> Result<MatchConfig, ConfigError> {
        let mut operators = [Operator::Engine; Seat::COUNT];
        operators[human.index()] = Operator::Human;
        MatchConfig::new(length, first, operators, search)
    }

    /// A match where the engine plays both seats.
    pub fn engine_vs_engine(
        length: usize,
        first: Seat,
        search: SearchConfig,
    ) -> Result<MatchConfig, ConfigError> {
        MatchConfig::new(length, first, [Operator::Engine; Seat::COUNT], search)
    }

    /// Starting sequence length.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Seat that makes the first move.
    #[inline]
    pub fn first(&self) -> Seat {
        self.first
    }

    /// Operator of the given seat.
    #[inline]
    pub fn operator(&self, seat: Seat) -> Operator {
        self.operators[seat.index()]
    }

    /// Search settings used for every engine seat.
    #[inline]
    pub fn search(&self) -> SearchConfig {
        self.search
    }
}
