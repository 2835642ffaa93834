use std::collections::BTreeMap;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::Bet;
use crate::search::{Alternative, MultiResult};

/// Outgoing response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiResponse {
    pub message: String,
    pub target_odds: f64,
    #[serde(with = "rust_decimal::serde::float")]
    pub stake: Decimal,
    pub combination: Option<CombinationView>,
    pub player_alternatives: BTreeMap<usize, Vec<AlternativeView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationView {
    pub legs: Vec<Bet>,
    #[serde(with = "rust_decimal::serde::float")]
    pub achieved_odds: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub potential_win: Decimal,
}

/// A substitute leg priced in money.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeView {
    #[serde(flatten)]
    pub bet: Bet,
    #[serde(with = "rust_decimal::serde::float")]
    pub new_multi_odds: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub new_potential_win: Decimal,
}

impl MultiResponse {
    /// Price a search result for `stake`.
    ///
    /// `tolerance` only appears in the message when nothing was found.
    #[must_use]
    pub fn from_result(result: &MultiResult, stake: Decimal, tolerance: f64) -> Self {
        let Some(combination) = &result.combination else {
            return Self {
                message: format!(
                    "No combination found matching target odds of {:.2} (within tolerance {tolerance}). Try different stake/win amounts.",
                    result.target_odds
                ),
                target_odds: result.target_odds,
                stake,
                combination: None,
                player_alternatives: BTreeMap::new(),
                seed: result.seed,
            };
        };

        let player_alternatives = result
            .alternatives
            .iter()
            .map(|(position, alts)| {
                let views = alts.iter().map(|alt| price_alternative(alt, stake)).collect();
                (*position, views)
            })
            .collect();

        Self {
            message: "Multi combination found with player alternatives.".to_string(),
            target_odds: result.target_odds,
            stake,
            combination: Some(CombinationView {
                legs: combination.legs.clone(),
                achieved_odds: round2(combination.odds),
                potential_win: (to_decimal(combination.odds) * stake).round_dp(2),
            }),
            player_alternatives,
            seed: result.seed,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.combination.is_some()
    }
}

fn price_alternative(alt: &Alternative, stake: Decimal) -> AlternativeView {
    let new_multi_odds = round2(alt.expected_multi_odds);
    AlternativeView {
        bet: alt.bet.clone(),
        new_multi_odds,
        new_potential_win: (new_multi_odds * stake).round_dp(2),
    }
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

fn round2(value: f64) -> Decimal {
    to_decimal(value).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{FinalCombination, SearchEstimate, SearchStats};
    use crate::testkit::domain::bet;
    use rust_decimal_macros::dec;

    fn stats() -> SearchStats {
        SearchStats {
            candidates: 1,
            timed_out: false,
            elapsed_ms: 3,
            nodes_visited: 10,
            estimate: SearchEstimate {
                games: 2,
                bets: 4,
                avg_bets_per_game: 2.0,
                max_legs: 8,
                combinations: 8.0,
                threshold: 100_000.0,
                exceeds_threshold: false,
            },
        }
    }

    fn found() -> MultiResult {
        let legs = vec![bet("smith", "g1", 2.0), bet("walker", "g2", 3.0)];
        let mut alternatives = BTreeMap::new();
        alternatives.insert(
            0,
            vec![Alternative {
                bet: bet("jones", "g1", 2.1),
                expected_multi_odds: 6.300000000000001,
                expected_diff: 0.3,
            }],
        );
        MultiResult {
            target_odds: 6.0,
            combination: Some(FinalCombination {
                legs,
                odds: 6.0,
                diff: 0.0,
            }),
            alternatives,
            stats: stats(),
            seed: Some(42),
        }
    }

    #[test]
    fn test_found_response_is_priced() {
        let response = MultiResponse::from_result(&found(), dec!(10), 0.01);
        let combination = response.combination.as_ref().unwrap();

        assert_eq!(combination.achieved_odds, dec!(6.00));
        assert_eq!(combination.potential_win, dec!(60.00));

        let alt = &response.player_alternatives[&0][0];
        assert_eq!(alt.new_multi_odds, dec!(6.30));
        assert_eq!(alt.new_potential_win, dec!(63.00));
    }

    #[test]
    fn test_found_response_json_shape() {
        let response = MultiResponse::from_result(&found(), dec!(10), 0.01);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["combination"]["achievedOdds"], 6.0);
        assert_eq!(value["combination"]["legs"][0]["playerId"], "smith");
        let alt = &value["playerAlternatives"]["0"][0];
        assert_eq!(alt["newMultiOdds"], 6.3);
        assert_eq!(alt["newPotentialWin"], 63.0);
        assert_eq!(alt["playerId"], "jones");
        assert!(alt.get("expectedDiff").is_none());
        assert!(alt.get("expectedMultiOdds").is_none());
        assert_eq!(value["seed"], 42);
    }

    #[test]
    fn test_not_found_response() {
        let result = MultiResult {
            target_odds: 7.5,
            combination: None,
            alternatives: BTreeMap::new(),
            stats: stats(),
            seed: None,
        };
        let response = MultiResponse::from_result(&result, dec!(4), 0.01);

        assert!(!response.is_found());
        assert!(response
            .message
            .starts_with("No combination found matching target odds of 7.50 (within tolerance 0.01)"));

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["combination"].is_null());
        assert_eq!(value["playerAlternatives"], serde_json::json!({}));
        assert!(value.get("seed").is_none());
    }
}
