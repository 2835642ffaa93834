//! Search tuning parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::search::{
    LegMode, COMBINATIONS_WARN_THRESHOLD, DEFAULT_ALTERNATIVES, MAX_COMBINED_LEGS, MAX_LEGS,
    MAX_PER_POSITION, MAX_TARGET_ODDS, MIN_LEGS, ODDS_TOLERANCE, TIME_BUDGET,
};

/// Configuration for the combination search.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchConfig {
    /// Absolute distance from target at which a combination is accepted
    /// immediately.
    #[serde(default = "default_odds_tolerance")]
    pub odds_tolerance: f64,

    /// Fewest legs a combination may have.
    #[serde(default = "default_min_legs")]
    pub min_legs: usize,

    /// Leg ceiling for single-sport searches.
    #[serde(default = "default_max_legs")]
    pub max_legs: usize,

    /// Leg ceiling for combined-sport searches.
    #[serde(default = "default_max_combined_legs")]
    pub max_combined_legs: usize,

    /// Alternatives requested when a caller gives no count; the search stops
    /// once it holds twice this many raw candidates.
    #[serde(default = "default_alternatives")]
    pub default_alternatives: usize,

    /// Substitutes kept per position.
    #[serde(default = "default_max_per_position")]
    pub max_per_position: usize,

    /// Wall-clock budget for one search, in milliseconds.
    #[serde(default = "default_time_budget_ms")]
    pub time_budget_ms: u64,

    /// Estimated search-space size above which a warning is logged.
    #[serde(default = "default_combinations_warn_threshold")]
    pub combinations_warn_threshold: f64,

    /// Largest target odds a request may ask for.
    #[serde(default = "default_max_target_odds")]
    pub max_target_odds: f64,
}

fn default_odds_tolerance() -> f64 {
    ODDS_TOLERANCE
}

fn default_min_legs() -> usize {
    MIN_LEGS
}

fn default_max_legs() -> usize {
    MAX_LEGS
}

fn default_max_combined_legs() -> usize {
    MAX_COMBINED_LEGS
}

fn default_alternatives() -> usize {
    DEFAULT_ALTERNATIVES
}

fn default_max_per_position() -> usize {
    MAX_PER_POSITION
}

fn default_time_budget_ms() -> u64 {
    TIME_BUDGET.as_millis() as u64
}

fn default_combinations_warn_threshold() -> f64 {
    COMBINATIONS_WARN_THRESHOLD
}

fn default_max_target_odds() -> f64 {
    MAX_TARGET_ODDS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            odds_tolerance: default_odds_tolerance(),
            min_legs: default_min_legs(),
            max_legs: default_max_legs(),
            max_combined_legs: default_max_combined_legs(),
            default_alternatives: default_alternatives(),
            max_per_position: default_max_per_position(),
            time_budget_ms: default_time_budget_ms(),
            combinations_warn_threshold: default_combinations_warn_threshold(),
            max_target_odds: default_max_target_odds(),
        }
    }
}

impl SearchConfig {
    /// Leg ceiling for the given mode.
    #[must_use]
    pub fn max_legs_for(&self, mode: LegMode) -> usize {
        match mode {
            LegMode::Single => self.max_legs,
            LegMode::Combined => self.max_combined_legs,
        }
    }

    #[must_use]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }
}
