use anyhow::Result;
use tracing::info;

use sevens_core::{Outcome, Seat};
use sevens_engine::{Algorithm, Heuristic, SearchConfig};
use sevens_match::{CLASSIC_MIN_LENGTH, MatchConfig, MatchController};

/// Play one engine-vs-engine exhibition match and log every move.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let search = SearchConfig::new(Algorithm::AlphaBeta, 4, Heuristic::default())?;
    let config = MatchConfig::engine_vs_engine(CLASSIC_MIN_LENGTH, Seat::A, search)?;
    let mut controller = MatchController::new(config);

    info!(state = %controller.state(), "exhibition match starting");

    while !controller.is_over() {
        let report = controller.compute_engine_move()?;
        info!(
            mv = %report.best_move,
            value = report.value,
            nodes = report.nodes,
            state = %controller.state(),
            "engine move"
        );
    }

    let state = controller.state();
    match controller.outcome() {
        Some(Outcome::Win(seat)) => info!(
            winner = %seat,
            score_a = state.score(Seat::A),
            score_b = state.score(Seat::B),
            "match decided"
        ),
        Some(Outcome::Tie) => info!(score = state.score(Seat::A), "match tied"),
        None => {}
    }

    Ok(())
}
