//! Catalog and combination types shared by the search, ranking and
//! alternative finder.

mod bet;
mod catalog;
mod ids;
mod selection;

pub mod error;

pub use bet::Bet;
pub use catalog::{BetCatalog, GameGroup};
pub use ids::{BetId, GameId};
pub use selection::{combined_odds, repair_one_bet_per_game, verify_one_bet_per_game, Selection};
