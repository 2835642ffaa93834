//! The bet catalog: available wagers grouped by game.

use std::collections::BTreeMap;

use super::error::DomainError;
use super::{Bet, GameId};

/// All wager options for one game.
///
/// Every bet in the group carries the group's game identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct GameGroup {
    game_id: GameId,
    description: String,
    bets: Vec<Bet>,
}

impl GameGroup {
    /// Create a group, rejecting bets recorded against a different game.
    pub fn new(
        game_id: GameId,
        description: impl Into<String>,
        bets: Vec<Bet>,
    ) -> Result<Self, DomainError> {
        if let Some(stray) = bets.iter().find(|bet| bet.game_id != game_id) {
            return Err(DomainError::GameMismatch {
                bet_id: stray.id.to_string(),
                expected: game_id,
                found: stray.game_id.clone(),
            });
        }

        Ok(Self {
            game_id,
            description: description.into(),
            bets,
        })
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Bets whose odds can take part in a product.
    pub fn usable_bets(&self) -> impl Iterator<Item = &Bet> {
        self.bets.iter().filter(|bet| bet.is_usable())
    }

    /// Highest usable odds in the game, if any.
    #[must_use]
    pub fn best_odds(&self) -> Option<f64> {
        self.usable_bets().map(|bet| bet.odds).reduce(f64::max)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}

/// Mapping from game identifier to the wagers offered for that game.
///
/// Games iterate in identifier order so a seeded search is reproducible.
/// The catalog is read-only input to a search and is never mutated by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BetCatalog {
    games: BTreeMap<GameId, GameGroup>,
}

impl BetCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from groups, rejecting duplicate games.
    pub fn from_groups(groups: impl IntoIterator<Item = GameGroup>) -> Result<Self, DomainError> {
        let mut catalog = Self::new();
        for group in groups {
            catalog.insert_group(group)?;
        }
        Ok(catalog)
    }

    /// Add a game group.
    pub fn insert_group(&mut self, group: GameGroup) -> Result<(), DomainError> {
        if self.games.contains_key(group.game_id()) {
            return Err(DomainError::DuplicateGame(group.game_id().clone()));
        }
        self.games.insert(group.game_id().clone(), group);
        Ok(())
    }

    /// Add a game group, handing back any group it replaced.
    pub fn replace_group(&mut self, group: GameGroup) -> Option<GameGroup> {
        self.games.insert(group.game_id().clone(), group)
    }

    pub fn game(&self, id: &GameId) -> Option<&GameGroup> {
        self.games.get(id)
    }

    pub fn games(&self) -> impl Iterator<Item = &GameGroup> {
        self.games.values()
    }

    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn bet_count(&self) -> usize {
        self.games.values().map(GameGroup::len).sum()
    }

    /// Average number of options per game (zero for an empty catalog).
    #[must_use]
    pub fn average_bets_per_game(&self) -> f64 {
        self.bet_count() as f64 / self.game_count().max(1) as f64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, odds: &[f64]) -> GameGroup {
        let bets = odds
            .iter()
            .enumerate()
            .map(|(i, o)| Bet::new(format!("{id}-p{i}"), id, "ATS", *o))
            .collect();
        GameGroup::new(GameId::from(id), format!("{id} match"), bets).unwrap()
    }

    #[test]
    fn test_group_rejects_foreign_bet() {
        let result = GameGroup::new(
            GameId::from("g1"),
            "g1",
            vec![Bet::new("p", "g2", "ATS", 2.0)],
        );
        assert_eq!(
            result,
            Err(DomainError::GameMismatch {
                bet_id: "p".into(),
                expected: GameId::from("g1"),
                found: GameId::from("g2"),
            })
        );
    }

    #[test]
    fn test_best_odds_ignores_unusable() {
        let g = group("g1", &[2.0, -4.0, 3.5, f64::NAN]);
        assert_eq!(g.best_odds(), Some(3.5));
        assert_eq!(group("g2", &[0.0]).best_odds(), None);
    }

    #[test]
    fn test_catalog_counts() {
        let catalog = BetCatalog::from_groups([group("g1", &[2.0, 3.0]), group("g2", &[4.0])]).unwrap();

        assert_eq!(catalog.game_count(), 2);
        assert_eq!(catalog.bet_count(), 3);
        assert!((catalog.average_bets_per_game() - 1.5).abs() < 1e-12);
        assert!(catalog.game(&GameId::from("g2")).is_some());
    }

    #[test]
    fn test_catalog_rejects_duplicate_game() {
        let result = BetCatalog::from_groups([group("g1", &[2.0]), group("g1", &[3.0])]);
        assert_eq!(result, Err(DomainError::DuplicateGame(GameId::from("g1"))));
    }

    #[test]
    fn test_replace_group_keeps_latest() {
        let mut catalog = BetCatalog::new();
        assert!(catalog.replace_group(group("g1", &[2.0])).is_none());

        let previous = catalog.replace_group(group("g1", &[3.0, 4.0])).unwrap();
        assert_eq!(previous.len(), 1);
        assert_eq!(catalog.game_count(), 1);
        assert_eq!(catalog.game(&GameId::from("g1")).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = BetCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.average_bets_per_game(), 0.0);
    }
}
