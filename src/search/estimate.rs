//! Search-space size estimate.

use serde::Serialize;

use crate::domain::BetCatalog;

/// Rough size of the space a search would have to enumerate.
///
/// Purely diagnostic: a large estimate is reported but never shortens or
/// aborts a search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEstimate {
    pub games: usize,
    pub bets: usize,
    pub avg_bets_per_game: f64,
    pub max_legs: usize,
    /// `min(avg ^ max_legs, 2 ^ games * avg)`.
    pub combinations: f64,
    pub threshold: f64,
    pub exceeds_threshold: bool,
}

impl SearchEstimate {
    #[must_use]
    pub fn compute(catalog: &BetCatalog, max_legs: usize, threshold: f64) -> Self {
        let games = catalog.game_count();
        let avg = catalog.average_bets_per_game();
        let by_legs = avg.powf(max_legs as f64);
        let by_games = 2f64.powf(games as f64) * avg;
        let combinations = by_legs.min(by_games);

        Self {
            games,
            bets: catalog.bet_count(),
            avg_bets_per_game: avg,
            max_legs,
            combinations,
            threshold,
            exceeds_threshold: combinations > threshold,
        }
    }
}
