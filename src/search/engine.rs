//! End-to-end search for one request.

use std::collections::BTreeMap;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, instrument};

use super::{
    find_alternatives, select_combination, Alternative, CombinationSearch, FinalCombination,
    LegMode, SearchEstimate, SearchObserver, SearchParams, TracingObserver,
};
use crate::config::SearchConfig;
use crate::domain::BetCatalog;
use crate::error::SearchError;

/// What the caller wants.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub target_odds: f64,
    /// Alternatives requested; falls back to the configured default.
    pub alternatives: Option<usize>,
    pub mode: LegMode,
    /// Seed for the random source; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Overrides the configured time budget.
    pub time_budget: Option<Duration>,
}

impl SearchRequest {
    #[must_use]
    pub fn new(target_odds: f64) -> Self {
        Self {
            target_odds,
            alternatives: None,
            mode: LegMode::default(),
            seed: None,
            time_budget: None,
        }
    }

    #[must_use]
    pub fn with_alternatives(mut self, alternatives: usize) -> Self {
        self.alternatives = Some(alternatives);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: LegMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// Traversal statistics reported alongside a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub candidates: usize,
    pub timed_out: bool,
    pub elapsed_ms: u64,
    pub nodes_visited: u64,
    pub estimate: SearchEstimate,
}

/// Result of one request.
///
/// `combination` is `None` when nothing landed within tolerance; that is a
/// normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiResult {
    pub target_odds: f64,
    pub combination: Option<FinalCombination>,
    pub alternatives: BTreeMap<usize, Vec<Alternative>>,
    pub stats: SearchStats,
    /// Seed that reproduces this result, when the finder chose the random
    /// source itself.
    pub seed: Option<u64>,
}

impl MultiResult {
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.combination.is_some()
    }
}

/// Runs search, ranking and the alternative finder for a request.
#[derive(Debug, Clone, Default)]
pub struct MultiFinder {
    config: SearchConfig,
}

impl MultiFinder {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build traversal parameters for a request.
    #[must_use]
    pub fn params(&self, request: &SearchRequest) -> SearchParams {
        SearchParams {
            target_odds: request.target_odds,
            tolerance: self.config.odds_tolerance,
            min_legs: self.config.min_legs,
            max_legs: self.config.max_legs_for(request.mode),
            alternatives: request.alternatives.unwrap_or(self.config.default_alternatives),
            time_budget: request
                .time_budget
                .unwrap_or_else(|| self.config.time_budget()),
            warn_threshold: self.config.combinations_warn_threshold,
        }
    }

    /// Seed a fresh random source and report through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when the request is invalid (e.g. target ≤ 0).
    pub fn find(
        &self,
        catalog: &BetCatalog,
        request: &SearchRequest,
    ) -> Result<MultiResult, SearchError> {
        let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut result = self.find_with(catalog, request, &mut rng, &mut TracingObserver)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Run with a caller-supplied random source and observer.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when the request is invalid.
    #[instrument(
        skip_all,
        fields(target_odds = request.target_odds, mode = ?request.mode)
    )]
    pub fn find_with<R, O>(
        &self,
        catalog: &BetCatalog,
        request: &SearchRequest,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<MultiResult, SearchError>
    where
        R: Rng + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let params = self.params(request);
        let search = CombinationSearch::new(params);
        let outcome = search.run(catalog, &mut *rng, observer)?;

        let params = search.params();
        let stats = SearchStats {
            candidates: outcome.candidates.len(),
            timed_out: outcome.timed_out,
            elapsed_ms: outcome.elapsed.as_millis() as u64,
            nodes_visited: outcome.nodes_visited,
            estimate: outcome.estimate,
        };

        let combination = select_combination(
            outcome.candidates,
            params.target_odds,
            &(params.min_legs..=params.max_legs),
            rng,
        );

        let alternatives = match &combination {
            Some(chosen) => {
                info!(
                    legs = chosen.len(),
                    odds = chosen.odds,
                    diff = chosen.diff,
                    "Combination selected"
                );
                find_alternatives(
                    chosen,
                    catalog,
                    params.target_odds,
                    self.config.max_per_position,
                )
            }
            None => {
                info!("No combination found within tolerance");
                BTreeMap::new()
            }
        };

        Ok(MultiResult {
            target_odds: params.target_odds,
            combination,
            alternatives,
            stats,
            seed: None,
        })
    }
}
