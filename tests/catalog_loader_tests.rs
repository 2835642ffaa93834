//! Catalog file loading.

mod support;

use multileg::adapter::outbound::catalog::{load_catalog, parse_catalog};
use multileg::domain::GameId;
use multileg::error::{CatalogError, Error};
use multileg::search::{MultiFinder, SearchRequest};
use support::catalog::{demo_catalog_path, uniform_catalog_json, write_temp};

#[test]
fn demo_catalog_loads() {
    let catalog = load_catalog(demo_catalog_path()).unwrap();

    assert_eq!(catalog.game_count(), 5);
    // one bet in the sample is suspended ("SUS") and skipped
    assert_eq!(catalog.bet_count(), 26);

    for game in catalog.games() {
        for bet in game.bets() {
            assert_eq!(&bet.game_id, game.game_id());
            assert_eq!(bet.game_description, game.description());
            assert!(bet.is_usable());
        }
    }
}

#[test]
fn numeric_strings_are_accepted() {
    let json = r#"[{"gameId": "g1", "bets": [
        {"playerId": "a", "playerName": "A", "market": "ATS", "odds": "2.75", "team": "X"},
        {"playerId": "b", "playerName": "B", "market": "ATS", "odds": 3, "team": "Y"}
    ]}]"#;
    let catalog = parse_catalog(json).unwrap();
    let game = catalog.game(&GameId::from("g1")).unwrap();

    let odds: Vec<f64> = game.bets().iter().map(|bet| bet.odds).collect();
    assert_eq!(odds, vec![2.75, 3.0]);
    assert_eq!(game.description(), "Game g1");
}

#[test]
fn game_with_only_invalid_odds_is_dropped() {
    let json = r#"[
        {"gameId": "g1", "bets": [{"playerId": "a", "market": "ATS", "odds": "n/a"}]},
        {"gameId": "g2", "bets": [{"playerId": "b", "market": "ATS", "odds": 2.0}]}
    ]"#;
    let catalog = parse_catalog(json).unwrap();

    assert_eq!(catalog.game_count(), 1);
    assert!(catalog.game(&GameId::from("g1")).is_none());
}

#[test]
fn unreadable_and_malformed_files_are_catalog_errors() {
    let (_dir, path) = write_temp("broken.json", "[{\"gameId\": ");
    assert!(matches!(
        load_catalog(&path),
        Err(Error::Catalog(CatalogError::Parse(_)))
    ));

    let missing = path.with_file_name("missing.json");
    assert!(matches!(
        load_catalog(&missing),
        Err(Error::Catalog(CatalogError::ReadFile(_)))
    ));
}

#[test]
fn loaded_catalog_feeds_the_finder() {
    let (_dir, path) = write_temp("bets.json", &uniform_catalog_json(4, &[2.0, 3.0, 4.0]));
    let catalog = load_catalog(&path).unwrap();

    let result = MultiFinder::default()
        .find(&catalog, &SearchRequest::new(12.0).with_seed(21))
        .unwrap();
    let combination = result.combination.expect("3.0 x 4.0 or 2.0 x 2.0 x 3.0");
    assert!((combination.odds - 12.0).abs() <= 1.2);
}

#[test]
fn repeated_game_keeps_the_later_entry() {
    let json = r#"[
        {"gameId": "g1", "gameDescription": "first", "bets": [{"playerId": "a", "market": "ATS", "odds": 2.0}]},
        {"gameId": "g2", "bets": [{"playerId": "b", "market": "ATS", "odds": 2.5}]},
        {"gameId": "g1", "gameDescription": "second", "bets": [{"playerId": "c", "market": "ATS", "odds": 3.0}]}
    ]"#;
    let (_dir, path) = write_temp("dupes.json", json);
    let catalog = load_catalog(&path).unwrap();

    assert_eq!(catalog.game_count(), 2);
    let g1 = catalog.game(&GameId::from("g1")).unwrap();
    assert_eq!(g1.description(), "second");
    assert_eq!(g1.bets()[0].id.as_str(), "c");
}
