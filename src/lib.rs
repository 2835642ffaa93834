//! Multileg - multi-leg bet construction for a target payout.
//!
//! Given a catalog of bets grouped by game and a target odds value (desired
//! win divided by stake), the crate finds a combination of bets, at most one
//! per game, whose odds product lands close to the target, then suggests
//! same-game substitutes for each leg.
//!
//! # Modules
//!
//! - [`domain`] - Bets, games, the catalog and selection invariants
//! - [`search`] - Randomized backtracking, ranking and alternatives
//! - [`config`] - TOML configuration with defaults for every field
//! - [`adapter`] - JSON and CSV catalog loading, request/response shaping and the CLI
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use multileg::adapter::outbound::catalog::load_catalog;
//! use multileg::config::Config;
//! use multileg::search::{MultiFinder, SearchRequest};
//!
//! fn main() -> multileg::error::Result<()> {
//!     let config = Config::load("multileg.toml")?;
//!     let catalog = load_catalog("bets.json")?;
//!     let result = MultiFinder::new(config.search).find(&catalog, &SearchRequest::new(25.0))?;
//!     println!("found: {}", result.is_found());
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod search;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
