//! Bet catalog ingestion from CSV price sheets.
//!
//! Three sheets describe a round: the matchup sheet lists the players of
//! every game, and two price sheets carry each player's anytime-try-scorer
//! (`ATS`) and two-plus-tries (`2+`) prices. They are joined on the trimmed
//! player name; every player with a price gets one bet per market.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{BetRecord, GameRecord, MatchupRow, PriceRow};
use super::loader::build_catalog;
use crate::domain::BetCatalog;
use crate::error::{CatalogError, Result};

const MATCHUP_FILE: &str = "Updated_Player_Matchup_Data.csv";
const ATS_FILE: &str = "ats_summary.csv";
const TWO_PLUS_FILE: &str = "tpt_summary.csv";

/// Prefix of the game identifiers derived from matchup names.
const GAME_ID_PREFIX: &str = "NRL2024";

const ATS_MARKET: &str = "ATS";
const TWO_PLUS_MARKET: &str = "2+";

/// Locations of the three sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSheets {
    pub matchups: PathBuf,
    pub ats: PathBuf,
    pub two_plus: PathBuf,
}

impl CsvSheets {
    /// The sheets under their export names inside `dir`.
    #[must_use]
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            matchups: dir.join(MATCHUP_FILE),
            ats: dir.join(ATS_FILE),
            two_plus: dir.join(TWO_PLUS_FILE),
        }
    }
}

#[derive(Debug, Default)]
struct Prices {
    ats: Option<String>,
    two_plus: Option<String>,
}

/// Load a catalog by joining the matchup sheet with both price sheets.
///
/// A price sheet that cannot be read is logged and treated as empty; players
/// without any price contribute no bets.
///
/// # Errors
///
/// Returns an error if the matchup sheet cannot be read or parsed.
pub fn load_csv_catalog(sheets: &CsvSheets) -> Result<BetCatalog> {
    let matchups: Vec<MatchupRow> = read_rows(&sheets.matchups)?;

    let mut prices: HashMap<String, Prices> = HashMap::new();
    for (player, price) in read_price_sheet(&sheets.ats) {
        prices.entry(player).or_default().ats = Some(price);
    }
    for (player, price) in read_price_sheet(&sheets.two_plus) {
        prices.entry(player).or_default().two_plus = Some(price);
    }

    let catalog = build_catalog(join(matchups, &prices))?;
    debug!(
        matchups = %sheets.matchups.display(),
        games = catalog.game_count(),
        bets = catalog.bet_count(),
        "Loaded CSV catalog"
    );
    Ok(catalog)
}

/// Game identifier for a matchup such as `"Storm vs Broncos"`.
fn game_id_for(matchup: &str) -> String {
    format!("{GAME_ID_PREFIX}_{}", matchup.replace(" vs ", "_"))
}

fn join(rows: Vec<MatchupRow>, prices: &HashMap<String, Prices>) -> Vec<GameRecord> {
    let mut games: BTreeMap<String, Vec<BetRecord>> = BTreeMap::new();

    for row in rows {
        let name = row.player_name.trim();
        if name.is_empty() {
            continue;
        }
        let bets = games.entry(row.matchup).or_default();
        let Some(price) = prices.get(name) else {
            continue;
        };

        let markets = [
            (ATS_MARKET, &price.ats),
            (TWO_PLUS_MARKET, &price.two_plus),
        ];
        for (market, odds) in markets {
            if let Some(odds) = odds {
                bets.push(BetRecord {
                    player_id: format!("{name}_{market}"),
                    player_name: name.to_string(),
                    market: market.to_string(),
                    odds: Value::String(odds.clone()),
                    team: row.team_name.clone(),
                    sport: None,
                });
            }
        }
    }

    games
        .into_iter()
        .filter(|(_, bets)| !bets.is_empty())
        .map(|(matchup, bets)| GameRecord {
            game_id: Some(game_id_for(&matchup)),
            game_description: Some(matchup),
            bets,
        })
        .collect()
}

fn read_price_sheet(path: &Path) -> Vec<(String, String)> {
    let rows: Vec<PriceRow> = match read_rows(path) {
        Ok(rows) => rows,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable price sheet");
            return Vec::new();
        }
    };

    rows.into_iter()
        .filter_map(|row| {
            let player = row.player.trim();
            let price = row.price.trim();
            (!player.is_empty() && !price.is_empty())
                .then(|| (player.to_string(), price.to_string()))
        })
        .collect()
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_path(path)
        .map_err(CatalogError::Csv)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(CatalogError::Csv)?);
    }
    Ok(rows)
}
