//! Handler for `multileg search`.

use std::time::Duration;

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::SearchArgs;
use super::output;
use crate::adapter::inbound::api::{MultiRequest, MultiResponse};
use crate::config::Config;
use crate::domain::Bet;
use crate::error::Result;
use crate::search::{MultiFinder, SearchStats};

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Game")]
    game: String,
    #[tabled(rename = "Odds")]
    odds: String,
}

#[derive(Tabled)]
struct AlternativeRow {
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Multi")]
    multi: String,
    #[tabled(rename = "Win")]
    win: String,
}

impl LegRow {
    fn new(position: usize, bet: &Bet) -> Self {
        Self {
            position: position + 1,
            player: bet.player_name.clone(),
            team: bet.team.clone(),
            market: bet.market.clone(),
            game: bet.game_description.clone(),
            odds: format!("{:.2}", bet.odds),
        }
    }
}

/// Execute `search`.
pub fn execute(args: &SearchArgs, config: &Config) -> Result<()> {
    let request = MultiRequest {
        stake: args.stake,
        win_amount: args.win_amount,
        alternatives: args.alternatives,
        mode: args.mode,
        seed: args.seed,
    };
    let validated = request.validate(config.search.max_target_odds)?;
    let mut search = validated.search;
    if let Some(ms) = args.time_budget_ms {
        search = search.with_time_budget(Duration::from_millis(ms));
    }

    let catalog = args.source.source().load()?;

    if !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::section("Request");
        output::field("Stake", format!("${}", validated.stake));
        output::field("Win", format!("${}", validated.win_amount));
        output::field("Target odds", format!("{:.2}", validated.target_odds));
        output::field(
            "Catalog",
            format!("{} games, {} bets", catalog.game_count(), catalog.bet_count()),
        );
    }

    let finder = MultiFinder::new(config.search.clone());
    let pb = output::spinner("Searching combinations");
    let result = match finder.find(&catalog, &search) {
        Ok(result) => result,
        Err(e) => {
            output::spinner_fail(&pb, "Search rejected");
            return Err(e.into());
        }
    };
    output::spinner_success(&pb, &format!("Searched in {}ms", result.stats.elapsed_ms));

    let response = MultiResponse::from_result(&result, validated.stake, config.search.odds_tolerance);

    if output::is_json() {
        output::json_output(json!({
            "command": "search",
            "response": response,
            "stats": result.stats,
        }));
        return Ok(());
    }

    render(&response, &result.stats);
    Ok(())
}

fn render(response: &MultiResponse, stats: &SearchStats) {
    if stats.timed_out {
        output::warning("Time budget exhausted; showing the best combination found so far");
    }

    match &response.combination {
        Some(combination) => {
            output::section("Combination");
            let rows: Vec<LegRow> = combination
                .legs
                .iter()
                .enumerate()
                .map(|(i, leg)| LegRow::new(i, leg))
                .collect();
            output::lines(&Table::new(rows).to_string());
            output::field("Achieved odds", output::highlight(combination.achieved_odds));
            output::field("Potential win", output::highlight(format!("${}", combination.potential_win)));

            if response.player_alternatives.is_empty() {
                output::note("No alternatives within range");
            } else {
                output::section("Alternatives");
                for (position, alts) in &response.player_alternatives {
                    let replacing = combination
                        .legs
                        .get(*position)
                        .map_or("", |leg| leg.player_name.as_str());
                    output::field(&format!("Leg {}", position + 1), output::muted(replacing));
                    let rows: Vec<AlternativeRow> = alts
                        .iter()
                        .map(|alt| AlternativeRow {
                            player: alt.bet.player_name.clone(),
                            market: alt.bet.market.clone(),
                            odds: format!("{:.2}", alt.bet.odds),
                            multi: alt.new_multi_odds.to_string(),
                            win: format!("${}", alt.new_potential_win),
                        })
                        .collect();
                    output::lines(&Table::new(rows).to_string());
                }
            }
        }
        None => {
            output::warning(&response.message);
        }
    }

    output::section("Search");
    output::field("Candidates", stats.candidates);
    output::field("Nodes", stats.nodes_visited);
    output::field("Estimate", format!("{:.0}", stats.estimate.combinations));
    if let Some(seed) = response.seed {
        output::field("Seed", seed);
        output::hint(&format!("rerun with --seed {seed} to reproduce"));
    }
}
