//! Randomized backtracking over games.
//!
//! The traversal visits games in a shuffled order. At every game it explores
//! two branches in random order: skip the game, or take one of its bets
//! (also shuffled) as the next leg. Branches are pruned on overshoot and,
//! for high targets, when the remaining games cannot get close enough.
//! Elapsed time is checked on every recursive entry; once the budget is
//! spent the whole traversal unwinds with whatever was collected.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::{
    relative_distance, SearchEstimate, SearchObserver, FALLBACK_BAND, HIGH_TARGET,
    OVERSHOOT_LIMIT, REACH_FLOOR,
};
use crate::domain::{verify_one_bet_per_game, Bet, BetCatalog, Selection};
use crate::error::SearchError;

/// Inputs that shape one traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub target_odds: f64,
    /// Absolute tolerance for immediate acceptance.
    pub tolerance: f64,
    pub min_legs: usize,
    pub max_legs: usize,
    /// Requested alternatives; the traversal stops at twice this many
    /// raw candidates.
    pub alternatives: usize,
    pub time_budget: Duration,
    /// Estimate above which the observer is told the space is large.
    pub warn_threshold: f64,
}

impl SearchParams {
    /// Reject caller errors before any work is done.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.target_odds.is_finite() && self.target_odds > 0.0) {
            return Err(SearchError::InvalidTarget {
                target: self.target_odds,
            });
        }
        if self.alternatives == 0 {
            return Err(SearchError::InvalidAlternatives);
        }
        if self.min_legs == 0 || self.min_legs > self.max_legs {
            return Err(SearchError::InvalidLegBounds {
                min: self.min_legs,
                max: self.max_legs,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn candidate_limit(&self) -> usize {
        self.alternatives.saturating_mul(2)
    }
}

/// How a candidate was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Within the absolute tolerance of target.
    Tight,
    /// Within the relative fallback band, found after exhausting the games.
    Fallback,
}

/// A selection accepted during the traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub legs: Vec<&'a Bet>,
    /// Odds product at acceptance.
    pub odds: f64,
    /// `|odds - target|`.
    pub diff: f64,
    pub confidence: Confidence,
}

/// Everything a traversal produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub candidates: Vec<Candidate<'a>>,
    pub timed_out: bool,
    pub elapsed: Duration,
    pub nodes_visited: u64,
    pub estimate: SearchEstimate,
}

/// The backtracking search.
///
/// Holds only parameters; every [`run`](Self::run) owns its own selection
/// stack, candidate list and clock, so one instance can serve concurrent
/// callers as long as each supplies its own random source.
#[derive(Debug, Clone)]
pub struct CombinationSearch {
    params: SearchParams,
}

impl CombinationSearch {
    pub fn new(params: SearchParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Run the traversal over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] for invalid parameters. Running out of time or
    /// finding nothing is not an error.
    pub fn run<'a, R, O>(
        &self,
        catalog: &'a BetCatalog,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SearchOutcome<'a>, SearchError>
    where
        R: Rng + ?Sized,
        O: SearchObserver + ?Sized,
    {
        self.params.validate()?;

        let estimate = SearchEstimate::compute(
            catalog,
            self.params.max_legs,
            self.params.warn_threshold,
        );
        observer.on_estimate(&estimate);

        let mut games: Vec<Vec<&'a Bet>> = Vec::with_capacity(catalog.game_count());
        for group in catalog.games() {
            let mut usable = Vec::with_capacity(group.len());
            for bet in group.bets() {
                if bet.is_usable() {
                    usable.push(bet);
                } else {
                    observer.on_skipped_bet(bet);
                }
            }
            games.push(usable);
        }
        games.shuffle(&mut *rng);

        let mut walk = Walk {
            params: &self.params,
            reach: reach_bounds(&games),
            games,
            rng,
            observer,
            started: Instant::now(),
            selection: Selection::new(self.params.max_legs),
            candidates: Vec::new(),
            timed_out: false,
            nodes: 0,
        };
        walk.descend(0);

        let elapsed = walk.started.elapsed();
        if walk.timed_out {
            walk.observer.on_budget_exhausted(elapsed, walk.candidates.len());
        }

        let outcome = SearchOutcome {
            candidates: walk.candidates,
            timed_out: walk.timed_out,
            elapsed,
            nodes_visited: walk.nodes,
            estimate,
        };
        walk.observer.on_complete(&outcome);
        Ok(outcome)
    }
}

/// `reach[i]` bounds the product obtainable from games `i..`: each remaining
/// game contributes at most its best odds, or 1.0 when skipped.
fn reach_bounds(games: &[Vec<&Bet>]) -> Vec<f64> {
    let mut reach = vec![1.0; games.len() + 1];
    for i in (0..games.len()).rev() {
        let best = games[i].iter().map(|bet| bet.odds).fold(1.0, f64::max);
        reach[i] = reach[i + 1] * best;
    }
    reach
}

/// Mutable state threaded through one traversal.
struct Walk<'a, 'r, R: ?Sized, O: ?Sized> {
    params: &'r SearchParams,
    games: Vec<Vec<&'a Bet>>,
    reach: Vec<f64>,
    rng: &'r mut R,
    observer: &'r mut O,
    started: Instant,
    selection: Selection<'a>,
    candidates: Vec<Candidate<'a>>,
    timed_out: bool,
    nodes: u64,
}

impl<'a, R, O> Walk<'a, '_, R, O>
where
    R: Rng + ?Sized,
    O: SearchObserver + ?Sized,
{
    fn descend(&mut self, idx: usize) {
        if self.started.elapsed() >= self.params.time_budget {
            self.timed_out = true;
        }
        if self.halted() {
            return;
        }
        self.nodes += 1;

        let target = self.params.target_odds;
        let legs = self.selection.len();
        let product = self.selection.product();

        if legs >= self.params.min_legs && (product - target).abs() <= self.params.tolerance {
            self.accept(Confidence::Tight);
            return;
        }

        if idx >= self.games.len() {
            if legs >= self.params.min_legs && relative_distance(product, target) <= FALLBACK_BAND
            {
                self.accept(Confidence::Fallback);
            }
            return;
        }

        if target > HIGH_TARGET && product * self.reach[idx] < target * REACH_FLOOR {
            return;
        }
        if product > target * (1.0 + OVERSHOOT_LIMIT) {
            return;
        }

        let skip_first = self.rng.gen_bool(0.5);
        if skip_first {
            self.descend(idx + 1);
            if self.halted() {
                return;
            }
        }

        self.take_each(idx);

        if !skip_first && !self.halted() {
            self.descend(idx + 1);
        }
    }

    fn take_each(&mut self, idx: usize) {
        if self.selection.is_full() {
            return;
        }

        let mut bets = self.games[idx].clone();
        bets.shuffle(&mut *self.rng);

        for bet in bets {
            if !self.selection.push(bet) {
                continue;
            }
            self.descend(idx + 1);
            self.selection.pop();

            if self.halted() {
                return;
            }
        }
    }

    fn accept(&mut self, confidence: Confidence) {
        let legs = self.selection.snapshot();
        if !verify_one_bet_per_game(&legs) {
            self.observer.on_invariant_violation(&legs);
            return;
        }

        let odds = self.selection.product();
        let candidate = Candidate {
            legs,
            odds,
            diff: (odds - self.params.target_odds).abs(),
            confidence,
        };
        self.observer.on_candidate(&candidate);
        self.candidates.push(candidate);
    }

    fn halted(&self) -> bool {
        self.timed_out || self.candidates.len() >= self.params.candidate_limit()
    }
}
