//! Domain validation errors for catalog types.
//!
//! These errors are returned by constructors that validate catalog invariants.
//!
//! # Examples
//!
//! ```
//! use multileg::domain::{Bet, GameGroup, GameId};
//! use multileg::domain::error::DomainError;
//!
//! let stray = Bet::new("p1_ATS", "other-game", "ATS", 2.0);
//! let result = GameGroup::new(GameId::from("game-1"), "A vs B", vec![stray]);
//!
//! assert!(matches!(result, Err(DomainError::GameMismatch { .. })));
//! ```

use thiserror::Error;

use super::GameId;

/// Errors that occur when catalog invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Every bet in a game group must carry the group's game identifier.
    #[error("bet {bet_id} belongs to game {found}, not {expected}")]
    GameMismatch {
        /// The offending bet.
        bet_id: String,
        /// The group's game.
        expected: GameId,
        /// The game recorded on the bet.
        found: GameId,
    },

    /// A game group was inserted twice.
    #[error("duplicate game {0}")]
    DuplicateGame(GameId),
}
