//! A single wager option.

use serde::{Deserialize, Serialize};

use super::{BetId, GameId};

/// One wager option offered for a game.
///
/// Bets are immutable once loaded into a [`BetCatalog`](super::BetCatalog).
/// Odds are decimal multipliers; only finite, positive odds are usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    /// Selection identifier, e.g. `"J. Smith_ATS"`.
    #[serde(rename = "playerId")]
    pub id: BetId,
    pub game_id: GameId,
    pub game_description: String,
    /// Market label, e.g. `"ATS"` or `"2+"`.
    pub market: String,
    pub odds: f64,
    pub player_name: String,
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
}

impl Bet {
    /// Create a bet with empty descriptive metadata.
    pub fn new(
        id: impl Into<BetId>,
        game_id: impl Into<GameId>,
        market: impl Into<String>,
        odds: f64,
    ) -> Self {
        let game_id = game_id.into();
        Self {
            id: id.into(),
            game_description: format!("Game {game_id}"),
            game_id,
            market: market.into(),
            odds,
            player_name: String::new(),
            team: String::new(),
            sport: None,
        }
    }

    /// Set the player name.
    #[must_use]
    pub fn with_player(mut self, player_name: impl Into<String>, team: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self.team = team.into();
        self
    }

    /// Set the game description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.game_description = description.into();
        self
    }

    /// Set the sport tag.
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    /// Whether the odds can take part in a product.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.odds.is_finite() && self.odds > 0.0
    }

    /// Same selection in the same market, regardless of object identity.
    #[must_use]
    pub fn same_selection(&self, other: &Bet) -> bool {
        self.id == other.id && self.market == other.market
    }
}
