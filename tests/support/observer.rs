use std::time::Duration;

use multileg::domain::Bet;
use multileg::search::{Candidate, SearchEstimate, SearchObserver, SearchOutcome};

/// Observer that remembers what it was told.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub estimates: Vec<SearchEstimate>,
    pub skipped: Vec<String>,
    pub candidates: usize,
    pub violations: usize,
    pub budget_exhausted: Option<(Duration, usize)>,
    pub completed: bool,
}

impl SearchObserver for RecordingObserver {
    fn on_estimate(&mut self, estimate: &SearchEstimate) {
        self.estimates.push(*estimate);
    }

    fn on_skipped_bet(&mut self, bet: &Bet) {
        self.skipped.push(bet.id.to_string());
    }

    fn on_candidate(&mut self, _candidate: &Candidate<'_>) {
        self.candidates += 1;
    }

    fn on_invariant_violation(&mut self, _legs: &[&Bet]) {
        self.violations += 1;
    }

    fn on_budget_exhausted(&mut self, elapsed: Duration, candidates: usize) {
        self.budget_exhausted = Some((elapsed, candidates));
    }

    fn on_complete(&mut self, _outcome: &SearchOutcome<'_>) {
        self.completed = true;
    }
}
