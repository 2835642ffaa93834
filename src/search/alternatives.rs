//! Same-game substitutes for each leg of a chosen combination.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{FinalCombination, ALTERNATIVE_RATIO_MAX, ALTERNATIVE_RATIO_MIN};
use crate::domain::{Bet, BetCatalog};

/// A bet that could replace one leg while keeping the combination near target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    #[serde(flatten)]
    pub bet: Bet,
    /// Combination odds if this bet were swapped in.
    pub expected_multi_odds: f64,
    /// `|expected_multi_odds - target|`.
    pub expected_diff: f64,
}

/// Find up to `max_per_position` substitutes for every leg.
///
/// For the leg at position `i` the replacement alone must contribute
/// `required = target / (total / leg.odds)`. Any other bet from the same game
/// whose odds fall within 0.8x to 1.2x of `required` qualifies; substitutes
/// are ordered by how close the resulting combination lands to `target`.
/// Positions without a qualifying substitute are absent from the map.
#[must_use]
pub fn find_alternatives(
    combination: &FinalCombination,
    catalog: &BetCatalog,
    target: f64,
    max_per_position: usize,
) -> BTreeMap<usize, Vec<Alternative>> {
    let total: f64 = combination.legs.iter().map(|leg| leg.odds).product();
    let mut by_position = BTreeMap::new();

    for (position, leg) in combination.legs.iter().enumerate() {
        let Some(game) = catalog.game(&leg.game_id) else {
            continue;
        };

        let rest = total / leg.odds;
        let required = target / rest;

        let mut found: Vec<Alternative> = game
            .usable_bets()
            .filter(|alt| !alt.same_selection(leg))
            .filter(|alt| {
                let ratio = alt.odds / required;
                (ALTERNATIVE_RATIO_MIN..=ALTERNATIVE_RATIO_MAX).contains(&ratio)
            })
            .map(|alt| {
                let expected = rest * alt.odds;
                Alternative {
                    bet: alt.clone(),
                    expected_multi_odds: expected,
                    expected_diff: (expected - target).abs(),
                }
            })
            .collect();

        if found.is_empty() {
            continue;
        }

        found.sort_by(|a, b| a.expected_diff.total_cmp(&b.expected_diff));
        found.truncate(max_per_position);
        by_position.insert(position, found);
    }

    by_position
}
