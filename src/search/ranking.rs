//! Candidate ranking and final selection.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::warn;

use super::{relative_distance, Candidate, FINAL_BAND, TOP_PICKS};
use crate::domain::{combined_odds, repair_one_bet_per_game, verify_one_bet_per_game, Bet};

/// The combination returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalCombination {
    pub legs: Vec<Bet>,
    /// Odds product of `legs`.
    pub odds: f64,
    /// `|odds - target|`.
    pub diff: f64,
}

impl FinalCombination {
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

/// Sort candidates by distance from target and keep those that still hold up.
///
/// A candidate survives when, after recomputing its odds product from the
/// legs, it lies within [`FINAL_BAND`] of `target` and its leg count is in
/// `legs`. A candidate with two legs from one game is repaired by keeping
/// the first leg per game before the checks; that path means the search
/// broke its own invariant.
#[must_use]
pub fn rank_candidates<'a>(
    mut candidates: Vec<Candidate<'a>>,
    target: f64,
    legs: &RangeInclusive<usize>,
) -> Vec<Candidate<'a>> {
    candidates.sort_by(|a, b| a.diff.total_cmp(&b.diff));

    candidates
        .into_iter()
        .filter_map(|mut candidate| {
            if !verify_one_bet_per_game(&candidate.legs) {
                warn!(
                    legs = candidate.legs.len(),
                    "Repairing candidate with two legs from the same game"
                );
                candidate.legs = repair_one_bet_per_game(candidate.legs);
            }

            if !legs.contains(&candidate.legs.len()) {
                return None;
            }

            let odds = combined_odds(&candidate.legs);
            if relative_distance(odds, target) > FINAL_BAND {
                return None;
            }

            candidate.odds = odds;
            candidate.diff = (odds - target).abs();
            Some(candidate)
        })
        .collect()
}

/// Rank candidates and pick one of the best [`TOP_PICKS`] at random.
///
/// Returns `None` when nothing survives ranking. Identical candidates and an
/// identically seeded `rng` always produce the same pick.
pub fn select_combination<R: Rng + ?Sized>(
    candidates: Vec<Candidate<'_>>,
    target: f64,
    legs: &RangeInclusive<usize>,
    rng: &mut R,
) -> Option<FinalCombination> {
    let ranked = rank_candidates(candidates, target, legs);
    let top = &ranked[..ranked.len().min(TOP_PICKS)];

    top.choose(rng).map(|candidate| FinalCombination {
        legs: candidate.legs.iter().map(|leg| (*leg).clone()).collect(),
        odds: candidate.odds,
        diff: candidate.diff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Confidence;
    use crate::testkit::domain::bet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidate<'a>(legs: Vec<&'a Bet>, target: f64) -> Candidate<'a> {
        let odds = combined_odds(&legs);
        Candidate {
            legs,
            odds,
            diff: (odds - target).abs(),
            confidence: Confidence::Tight,
        }
    }

    #[test]
    fn test_rank_sorts_and_filters() {
        let a = bet("a", "g1", 2.0);
        let b = bet("b", "g2", 3.0);
        let c = bet("c", "g3", 3.2);
        let d = bet("d", "g4", 4.0);

        let ranked = rank_candidates(
            vec![
                candidate(vec![&a, &c], 6.0), // 6.4, 6.7% off
                candidate(vec![&a, &b], 6.0), // exact
                candidate(vec![&a, &d], 6.0), // 8.0, 33% off
            ],
            6.0,
            &(2..=8),
        );

        let odds: Vec<f64> = ranked.iter().map(|c| c.odds).collect();
        assert_eq!(odds.len(), 2);
        assert!((odds[0] - 6.0).abs() < 1e-9);
        assert!((odds[1] - 6.4).abs() < 1e-9);
    }

    #[test]
    fn test_rank_recomputes_stale_odds() {
        let a = bet("a", "g1", 2.0);
        let b = bet("b", "g2", 5.0);
        let mut stale = candidate(vec![&a, &b], 6.0);
        stale.odds = 6.0;
        stale.diff = 0.0;

        assert!(rank_candidates(vec![stale], 6.0, &(2..=8)).is_empty());
    }

    #[test]
    fn test_rank_enforces_leg_bounds() {
        let a = bet("a", "g1", 1.5);
        let b = bet("b", "g2", 2.0);
        let c = bet("c", "g3", 2.0);

        let ranked = rank_candidates(vec![candidate(vec![&a, &b, &c], 6.0)], 6.0, &(2..=2));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_repairs_duplicate_games() {
        let a = bet("a", "g1", 2.0);
        let b = bet("b", "g2", 3.0);
        let dup = bet("dup", "g1", 1.02);

        let ranked = rank_candidates(vec![candidate(vec![&a, &b, &dup], 6.0)], 6.0, &(2..=8));

        assert_eq!(ranked.len(), 1);
        assert!(verify_one_bet_per_game(&ranked[0].legs));
        assert_eq!(ranked[0].legs.len(), 2);
        assert!((ranked[0].odds - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_select_none_when_nothing_qualifies() {
        let a = bet("a", "g1", 2.0);
        let b = bet("b", "g2", 2.0);
        let mut rng = StdRng::seed_from_u64(1);

        let picked = select_combination(vec![candidate(vec![&a, &b], 6.0)], 6.0, &(2..=8), &mut rng);
        assert!(picked.is_none());
        assert!(select_combination(Vec::new(), 6.0, &(2..=8), &mut rng).is_none());
    }

    #[test]
    fn test_select_draws_from_top_three() {
        let legs: Vec<Bet> = (0..5)
            .map(|i| bet(&format!("x{i}"), &format!("g{i}"), 2.0 + 0.01 * i as f64))
            .collect();
        let base = bet("base", "base", 3.0);

        let make = || {
            legs.iter()
                .map(|leg| candidate(vec![&base, leg], 6.0))
                .collect::<Vec<_>>()
        };

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_combination(make(), 6.0, &(2..=8), &mut rng).unwrap();
            let id = picked.legs[1].id.to_string();
            assert!(["x0", "x1", "x2"].contains(&id.as_str()), "picked {id}");
        }
    }

    #[test]
    fn test_select_is_deterministic_for_seed() {
        let legs: Vec<Bet> = (0..4)
            .map(|i| bet(&format!("x{i}"), &format!("g{i}"), 2.0 + 0.01 * i as f64))
            .collect();
        let base = bet("base", "base", 3.0);
        let make = || {
            legs.iter()
                .map(|leg| candidate(vec![&base, leg], 6.0))
                .collect::<Vec<_>>()
        };

        for seed in 0..10 {
            let first = select_combination(make(), 6.0, &(2..=8), &mut StdRng::seed_from_u64(seed));
            let second = select_combination(make(), 6.0, &(2..=8), &mut StdRng::seed_from_u64(seed));
            assert_eq!(first, second);
        }
    }
}
