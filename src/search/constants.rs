//! Search tuning constants and shared helpers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Absolute distance from target at which a selection is accepted at once.
pub const ODDS_TOLERANCE: f64 = 0.01;

/// Relative band accepted for selections that reach the end of the game list.
pub const FALLBACK_BAND: f64 = 0.20;

/// Relative overshoot past which a branch is abandoned.
pub const OVERSHOOT_LIMIT: f64 = 0.10;

/// Relative band a candidate must satisfy to be returned.
pub const FINAL_BAND: f64 = 0.10;

/// Targets above this get reachability pruning.
pub const HIGH_TARGET: f64 = 50.0;

/// Fraction of a high target the remaining games must be able to reach.
pub const REACH_FLOOR: f64 = 0.5;

/// Number of best candidates the final pick is drawn from.
pub const TOP_PICKS: usize = 3;

/// Acceptance band for a substitute leg, as a ratio of the required odds.
pub const ALTERNATIVE_RATIO_MIN: f64 = 0.8;
pub const ALTERNATIVE_RATIO_MAX: f64 = 1.2;

pub const MIN_LEGS: usize = 2;
pub const MAX_LEGS: usize = 8;
pub const MAX_COMBINED_LEGS: usize = 17;
pub const MAX_PER_POSITION: usize = 3;

/// Alternatives per position when a request does not ask for a count.
pub const DEFAULT_ALTERNATIVES: usize = MAX_PER_POSITION;

pub const TIME_BUDGET: Duration = Duration::from_secs(10);
pub const COMBINATIONS_WARN_THRESHOLD: f64 = 100_000.0;
pub const MAX_TARGET_ODDS: f64 = 1000.0;

/// Which leg ceiling applies to a search.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LegMode {
    /// One sport's round of games.
    #[default]
    Single,
    /// Several sports pooled together; allows more legs.
    Combined,
}

/// `|odds - target| / target`.
#[must_use]
pub fn relative_distance(odds: f64, target: f64) -> f64 {
    (odds - target).abs() / target
}
