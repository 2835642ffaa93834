//! Builders for catalog primitives used across tests.
//!
//! Provides concise factory functions for [`Bet`], [`GameGroup`] and
//! [`BetCatalog`] so tests focus on assertions rather than construction
//! boilerplate.

use crate::domain::{Bet, BetCatalog, GameGroup, GameId};

/// Create an `ATS` bet.
pub fn bet(id: &str, game: &str, odds: f64) -> Bet {
    Bet::new(id, game, "ATS", odds).with_player(id, "Team")
}

/// Create a game group whose bets are named `{game}-p0`, `{game}-p1`, ...
pub fn game(id: &str, odds: &[f64]) -> GameGroup {
    let bets = odds
        .iter()
        .enumerate()
        .map(|(i, o)| bet(&format!("{id}-p{i}"), id, *o))
        .collect();
    game_with(id, bets)
}

/// Create a game group from prepared bets.
///
/// # Panics
///
/// Panics if a bet belongs to another game.
pub fn game_with(id: &str, bets: Vec<Bet>) -> GameGroup {
    GameGroup::new(GameId::from(id), format!("{id} match"), bets)
        .expect("bets must belong to the game")
}

/// Build a catalog from `(game id, odds)` pairs.
pub fn catalog(games: &[(&str, &[f64])]) -> BetCatalog {
    BetCatalog::from_groups(games.iter().map(|(id, odds)| game(id, odds)))
        .expect("game ids must be unique")
}

/// Build `n` games `g0..g{n-1}`, each offering the same odds.
pub fn uniform_catalog(n: usize, odds: &[f64]) -> BetCatalog {
    BetCatalog::from_groups((0..n).map(|i| game(&format!("g{i}"), odds)))
        .expect("game ids must be unique")
}
