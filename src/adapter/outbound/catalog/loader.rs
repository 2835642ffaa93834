//! Bet catalog ingestion from JSON files.
//!
//! Each bet is enriched with its game's identifier and description. Bets
//! whose odds are not numeric are skipped with a warning rather than failing
//! the whole load; games left without bets are dropped, and a game listed
//! twice keeps its later entry.

use std::path::Path;

use tracing::{debug, warn};

use super::dto::{BetRecord, GameRecord};
use crate::domain::{Bet, BetCatalog, GameGroup, GameId};
use crate::error::{CatalogError, Result};

/// Load a catalog from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<BetCatalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(CatalogError::ReadFile)?;
    let catalog = parse_catalog(&content)?;
    debug!(
        path = %path.display(),
        games = catalog.game_count(),
        bets = catalog.bet_count(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Parse a catalog from JSON text.
pub fn parse_catalog(content: &str) -> Result<BetCatalog> {
    let records: Vec<GameRecord> = serde_json::from_str(content).map_err(CatalogError::Parse)?;
    build_catalog(records)
}

/// Turn game records into a catalog.
pub fn build_catalog(records: Vec<GameRecord>) -> Result<BetCatalog> {
    let mut catalog = BetCatalog::new();

    for record in records {
        let Some(raw_id) = record.game_id.filter(|id| !id.trim().is_empty()) else {
            warn!("Skipping game without an identifier");
            continue;
        };
        let game_id = GameId::new(raw_id);
        let description = record
            .game_description
            .unwrap_or_else(|| format!("Game {game_id}"));

        let bets: Vec<Bet> = record
            .bets
            .into_iter()
            .filter_map(|bet| enrich(bet, &game_id, &description))
            .collect();

        if bets.is_empty() {
            debug!(game_id = %game_id, "Dropping game without usable bets");
            continue;
        }

        let group = GameGroup::new(game_id, description, bets)?;
        if let Some(previous) = catalog.replace_group(group) {
            warn!(
                game_id = %previous.game_id(),
                dropped_bets = previous.len(),
                "Replacing duplicate game with its later entry"
            );
        }
    }

    Ok(catalog)
}

fn enrich(record: BetRecord, game_id: &GameId, description: &str) -> Option<Bet> {
    let Some(odds) = record.parse_odds() else {
        warn!(
            game_id = %game_id,
            player_id = %record.player_id,
            odds = %record.odds,
            "Skipping bet with invalid odds"
        );
        return None;
    };

    Some(Bet {
        id: record.player_id.into(),
        game_id: game_id.clone(),
        game_description: description.to_string(),
        market: record.market,
        odds,
        player_name: record.player_name,
        team: record.team,
        sport: record.sport,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SAMPLE: &str = r#"[
        {
            "gameId": "NRL2024_Storm_Broncos",
            "gameDescription": "Storm vs Broncos",
            "bets": [
                {"playerId": "Smith_ATS", "playerName": "Smith", "market": "ATS", "odds": 2.5, "team": "Storm"},
                {"playerId": "Smith_2+", "playerName": "Smith", "market": "2+", "odds": "9.00", "team": "Storm"},
                {"playerId": "Jones_ATS", "playerName": "Jones", "market": "ATS", "odds": "SUS", "team": "Broncos"}
            ]
        },
        {
            "gameId": "NRL2024_Eels_Panthers",
            "bets": [
                {"playerId": "Lee_ATS", "playerName": "Lee", "market": "ATS", "odds": 3.1, "team": "Eels", "sport": "nrl"}
            ]
        },
        {"gameId": "NRL2024_Empty", "bets": []},
        {"gameDescription": "No id", "bets": [{"playerId": "x", "market": "ATS", "odds": 2.0}]}
    ]"#;

    #[test]
    fn test_parse_enriches_and_skips() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        assert_eq!(catalog.game_count(), 2);
        assert_eq!(catalog.bet_count(), 3);

        let storm = catalog.game(&GameId::from("NRL2024_Storm_Broncos")).unwrap();
        assert_eq!(storm.len(), 2);
        assert_eq!(storm.bets()[1].odds, 9.0);
        assert!(storm
            .bets()
            .iter()
            .all(|bet| bet.game_description == "Storm vs Broncos"));

        let eels = catalog.game(&GameId::from("NRL2024_Eels_Panthers")).unwrap();
        assert_eq!(eels.description(), "Game NRL2024_Eels_Panthers");
        assert_eq!(eels.bets()[0].sport.as_deref(), Some("nrl"));
    }

    #[test]
    fn test_duplicate_game_keeps_last_entry() {
        let json = r#"[
            {"gameId": "g1", "bets": [{"playerId": "a", "market": "ATS", "odds": 2.0}]},
            {"gameId": "g2", "bets": [{"playerId": "b", "market": "ATS", "odds": 2.5}]},
            {"gameId": "g1", "bets": [
                {"playerId": "c", "market": "ATS", "odds": 3.0},
                {"playerId": "d", "market": "2+", "odds": 7.0}
            ]}
        ]"#;
        let catalog = parse_catalog(json).unwrap();

        assert_eq!(catalog.game_count(), 2);
        let g1 = catalog.game(&GameId::from("g1")).unwrap();
        let ids: Vec<_> = g1.bets().iter().map(|bet| bet.id.as_str()).collect();
        assert_eq!(ids, ["c", "d"]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_catalog("{not json"),
            Err(Error::Catalog(CatalogError::Parse(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_catalog("/definitely/not/here.json"),
            Err(Error::Catalog(CatalogError::ReadFile(_)))
        ));
    }
}
