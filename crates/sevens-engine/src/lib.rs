//! Search and evaluation for sevens.

mod error;
pub mod eval;
pub mod search;

pub use error::SearchError;
pub use eval::Heuristic;
pub use search::{Algorithm, SearchConfig, SearchResult, find_best_move};
