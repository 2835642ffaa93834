//! Multi-leg combination search.
//!
//! The pipeline has three stages:
//!
//! 1. [`CombinationSearch`] - randomized, pruned, time-boxed backtracking over
//!    games that collects raw [`Candidate`]s whose odds product lies near the
//!    target.
//! 2. [`select_combination`] - sorts and re-filters the candidates and picks
//!    one of the best few at random.
//! 3. [`find_alternatives`] - proposes same-game substitutes for every
//!    position of the chosen combination.
//!
//! [`MultiFinder`] runs all three for a single request.
//!
//! # Example
//!
//! ```
//! use multileg::config::SearchConfig;
//! use multileg::domain::{Bet, BetCatalog, GameGroup, GameId};
//! use multileg::search::{LegMode, MultiFinder, SearchRequest};
//!
//! let mut catalog = BetCatalog::new();
//! for game in ["g1", "g2", "g3"] {
//!     let bets = vec![
//!         Bet::new(format!("{game}-a"), game, "ATS", 2.0),
//!         Bet::new(format!("{game}-b"), game, "ATS", 3.0),
//!     ];
//!     catalog.insert_group(GameGroup::new(GameId::from(game), game, bets).unwrap()).unwrap();
//! }
//!
//! let finder = MultiFinder::new(SearchConfig::default());
//! let request = SearchRequest::new(6.0).with_seed(7);
//! let result = finder.find(&catalog, &request).unwrap();
//!
//! let combination = result.combination.expect("2.0 x 3.0 is reachable");
//! assert!((combination.odds - 6.0).abs() <= 0.6);
//! ```

mod alternatives;
mod backtrack;
mod constants;
mod engine;
mod estimate;
mod observer;
mod ranking;

pub use alternatives::{find_alternatives, Alternative};
pub use backtrack::{Candidate, CombinationSearch, Confidence, SearchOutcome, SearchParams};
pub use constants::{relative_distance, LegMode};
pub use constants::{
    ALTERNATIVE_RATIO_MAX, ALTERNATIVE_RATIO_MIN, COMBINATIONS_WARN_THRESHOLD,
    DEFAULT_ALTERNATIVES, FALLBACK_BAND, FINAL_BAND, HIGH_TARGET,
    MAX_COMBINED_LEGS, MAX_LEGS, MAX_PER_POSITION, MAX_TARGET_ODDS, MIN_LEGS, ODDS_TOLERANCE,
    OVERSHOOT_LIMIT, REACH_FLOOR, TIME_BUDGET, TOP_PICKS,
};
pub use engine::{MultiFinder, MultiResult, SearchRequest, SearchStats};
pub use estimate::SearchEstimate;
pub use observer::{NoopObserver, SearchObserver, TracingObserver};
pub use ranking::{rank_candidates, select_combination, FinalCombination};
