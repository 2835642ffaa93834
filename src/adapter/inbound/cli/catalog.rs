//! Handler for `multileg catalog`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::CatalogArgs;
use super::output;
use crate::config::Config;
use crate::error::Result;
use crate::search::SearchEstimate;

#[derive(Tabled)]
struct GameRow {
    #[tabled(rename = "Game")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Bets")]
    bets: usize,
    #[tabled(rename = "Best odds")]
    best_odds: String,
}

/// Execute `catalog`.
pub fn execute(args: &CatalogArgs, config: &Config) -> Result<()> {
    let catalog = args.source.source().load()?;
    let estimate = SearchEstimate::compute(
        &catalog,
        config.search.max_legs_for(args.mode),
        config.search.combinations_warn_threshold,
    );

    if output::is_json() {
        let games: Vec<_> = catalog
            .games()
            .map(|game| {
                json!({
                    "gameId": game.game_id(),
                    "description": game.description(),
                    "bets": game.len(),
                    "bestOdds": game.best_odds(),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "catalog",
            "games": games,
            "estimate": estimate,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Catalog");
    output::field("Source", args.source.source());
    output::field("Games", catalog.game_count());
    output::field("Bets", catalog.bet_count());
    output::field("Avg per game", format!("{:.1}", catalog.average_bets_per_game()));

    if catalog.is_empty() {
        output::warning("Catalog has no usable games");
        return Ok(());
    }

    let rows: Vec<GameRow> = catalog
        .games()
        .map(|game| GameRow {
            id: game.game_id().to_string(),
            description: game.description().to_string(),
            bets: game.len(),
            best_odds: game
                .best_odds()
                .map_or_else(|| "-".to_string(), |odds| format!("{odds:.2}")),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Search space");
    output::field("Max legs", estimate.max_legs);
    output::field("Estimate", format!("{:.0}", estimate.combinations));
    if estimate.exceeds_threshold {
        output::warning("Large search space; searches will likely run to the time budget");
    }

    Ok(())
}
