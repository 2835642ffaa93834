//! Diagnostic hook for the combination search.
//!
//! Observers never influence the search; they only receive notifications.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::{Candidate, SearchEstimate, SearchOutcome};
use crate::domain::Bet;

/// Receives search diagnostics. All methods default to no-ops.
pub trait SearchObserver {
    /// Search-space estimate computed before the traversal starts.
    fn on_estimate(&mut self, _estimate: &SearchEstimate) {}

    /// A bet with unusable odds was excluded from the traversal.
    fn on_skipped_bet(&mut self, _bet: &Bet) {}

    /// A selection was accepted as a raw candidate.
    fn on_candidate(&mut self, _candidate: &Candidate<'_>) {}

    /// A selection broke the one-leg-per-game rule and was discarded.
    fn on_invariant_violation(&mut self, _legs: &[&Bet]) {}

    /// The wall-clock budget ran out before the traversal finished.
    fn on_budget_exhausted(&mut self, _elapsed: Duration, _candidates: usize) {}

    /// The traversal finished (normally or not).
    fn on_complete(&mut self, _outcome: &SearchOutcome<'_>) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that reports through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_estimate(&mut self, estimate: &SearchEstimate) {
        info!(
            games = estimate.games,
            bets = estimate.bets,
            avg_bets_per_game = %format!("{:.2}", estimate.avg_bets_per_game),
            max_legs = estimate.max_legs,
            combinations = %format!("{:.2e}", estimate.combinations),
            "Estimated search space"
        );
        if estimate.exceeds_threshold {
            warn!(
                combinations = %format!("{:.2e}", estimate.combinations),
                threshold = %format!("{:.2e}", estimate.threshold),
                "Search space is large; relying on pruning and the time budget"
            );
        }
    }

    fn on_skipped_bet(&mut self, bet: &Bet) {
        debug!(
            bet_id = %bet.id,
            game_id = %bet.game_id,
            odds = bet.odds,
            "Skipping bet with unusable odds"
        );
    }

    fn on_candidate(&mut self, candidate: &Candidate<'_>) {
        debug!(
            legs = candidate.legs.len(),
            odds = candidate.odds,
            diff = candidate.diff,
            confidence = ?candidate.confidence,
            "Candidate accepted"
        );
    }

    fn on_invariant_violation(&mut self, legs: &[&Bet]) {
        warn!(
            legs = legs.len(),
            "Discarding selection with two legs from the same game"
        );
    }

    fn on_budget_exhausted(&mut self, elapsed: Duration, candidates: usize) {
        warn!(
            elapsed_ms = elapsed.as_millis() as u64,
            candidates,
            "Time budget exceeded; returning candidates found so far"
        );
    }

    fn on_complete(&mut self, outcome: &SearchOutcome<'_>) {
        info!(
            candidates = outcome.candidates.len(),
            nodes = outcome.nodes_visited,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            timed_out = outcome.timed_out,
            "Search finished"
        );
    }
}
