//! Match orchestration for sevens: pairing human and engine seats over one
//! authoritative game state.

mod config;
mod controller;
mod error;

pub use config::{CLASSIC_MAX_LENGTH, CLASSIC_MIN_LENGTH, MatchConfig, Operator};
pub use controller::{MatchController, Phase, Selection};
pub use error::{ConfigError, EngineError, MoveError};
