//! In-progress and finalized leg selections.

use std::collections::HashSet;

use super::{Bet, GameId};

/// Product of the odds of all legs (1.0 for no legs).
#[must_use]
pub fn combined_odds(legs: &[&Bet]) -> f64 {
    legs.iter().map(|leg| leg.odds).product()
}

/// Check that no two legs share a game.
#[must_use]
pub fn verify_one_bet_per_game(legs: &[&Bet]) -> bool {
    let mut seen = HashSet::with_capacity(legs.len());
    legs.iter().all(|leg| seen.insert(&leg.game_id))
}

/// Keep only the first leg encountered for each game.
#[must_use]
pub fn repair_one_bet_per_game<'a>(legs: Vec<&'a Bet>) -> Vec<&'a Bet> {
    let mut seen: HashSet<&GameId> = HashSet::with_capacity(legs.len());
    legs.into_iter()
        .filter(|leg| seen.insert(&leg.game_id))
        .collect()
}

/// A combination being built during search.
///
/// Borrowed from the catalog; legs are pushed and popped as the search
/// descends and backtracks. No two legs share a game and the length never
/// exceeds `max_legs`.
#[derive(Debug)]
pub struct Selection<'a> {
    legs: Vec<&'a Bet>,
    products: Vec<f64>,
    max_legs: usize,
}

impl<'a> Selection<'a> {
    #[must_use]
    pub fn new(max_legs: usize) -> Self {
        Self {
            legs: Vec::with_capacity(max_legs),
            products: Vec::with_capacity(max_legs),
            max_legs,
        }
    }

    /// Append a leg. Returns false, leaving the selection untouched, when the
    /// selection is full or already holds a leg from the same game.
    pub fn push(&mut self, bet: &'a Bet) -> bool {
        if self.is_full() || self.contains_game(&bet.game_id) {
            return false;
        }
        let product = self.product() * bet.odds;
        self.legs.push(bet);
        self.products.push(product);
        true
    }

    pub fn pop(&mut self) -> Option<&'a Bet> {
        self.products.pop();
        self.legs.pop()
    }

    /// Running odds product.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.products.last().copied().unwrap_or(1.0)
    }

    #[must_use]
    pub fn contains_game(&self, game_id: &GameId) -> bool {
        self.legs.iter().any(|leg| &leg.game_id == game_id)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.legs.len() >= self.max_legs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Copy the current legs out of the stack.
    #[must_use]
    pub fn snapshot(&self) -> Vec<&'a Bet> {
        self.legs.clone()
    }
}
