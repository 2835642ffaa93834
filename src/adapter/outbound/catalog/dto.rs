//! Catalog file records.
//!
//! Mirrors the JSON produced by the data-ingestion job (an array of games,
//! each carrying its bets) and the rows of the CSV price sheets.

use serde::Deserialize;
use serde_json::Value;

/// One game entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub game_description: Option<String>,
    #[serde(default)]
    pub bets: Vec<BetRecord>,
}

/// One bet entry. Odds arrive either as numbers or numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    pub player_id: String,
    #[serde(default)]
    pub player_name: String,
    pub market: String,
    #[serde(default)]
    pub odds: Value,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub sport: Option<String>,
}

impl BetRecord {
    /// Numeric odds, if the field holds a number or a numeric string.
    pub fn parse_odds(&self) -> Option<f64> {
        match &self.odds {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// One row of the matchup sheet: a player listed for a game.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchupRow {
    #[serde(rename = "Matchup")]
    pub matchup: String,
    #[serde(rename = "Player Name")]
    pub player_name: String,
    #[serde(rename = "Team Name", default)]
    pub team_name: String,
}

/// One row of a price sheet. Each sheet names its price column differently.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRow {
    #[serde(rename = "Player", default)]
    pub player: String,
    #[serde(rename = "ATS_prices", alias = "Prices_TwoPlusTry", default)]
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(odds: Value) -> BetRecord {
        BetRecord {
            player_id: "p".into(),
            player_name: String::new(),
            market: "ATS".into(),
            odds,
            team: String::new(),
            sport: None,
        }
    }

    #[test]
    fn test_parse_odds_variants() {
        assert_eq!(record(serde_json::json!(2.5)).parse_odds(), Some(2.5));
        assert_eq!(record(serde_json::json!(3)).parse_odds(), Some(3.0));
        assert_eq!(record(serde_json::json!(" 4.20 ")).parse_odds(), Some(4.2));
        assert_eq!(record(serde_json::json!("n/a")).parse_odds(), None);
        assert_eq!(record(Value::Null).parse_odds(), None);
        assert_eq!(record(serde_json::json!([1.5])).parse_odds(), None);
    }
}
