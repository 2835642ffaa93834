use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::RequestError;
use crate::search::{LegMode, SearchRequest};

/// Incoming request body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiRequest {
    pub stake: Decimal,
    pub win_amount: Decimal,
    #[serde(default)]
    pub alternatives: Option<usize>,
    #[serde(default)]
    pub mode: LegMode,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A request whose amounts have been checked and turned into target odds.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub stake: Decimal,
    pub win_amount: Decimal,
    pub target_odds: f64,
    pub search: SearchRequest,
}

impl MultiRequest {
    #[must_use]
    pub fn new(stake: Decimal, win_amount: Decimal) -> Self {
        Self {
            stake,
            win_amount,
            alternatives: None,
            mode: LegMode::default(),
            seed: None,
        }
    }

    /// Check the amounts and derive `target = win / stake`.
    ///
    /// # Errors
    ///
    /// [`RequestError::InvalidAmounts`] unless `0 < stake < win`;
    /// [`RequestError::TargetTooHigh`] when the target exceeds `max_target_odds`.
    pub fn validate(&self, max_target_odds: f64) -> Result<ValidatedRequest, RequestError> {
        let invalid = || RequestError::InvalidAmounts {
            stake: self.stake,
            win: self.win_amount,
        };

        if self.stake <= Decimal::ZERO || self.win_amount <= self.stake {
            return Err(invalid());
        }

        let target_odds = self
            .win_amount
            .checked_div(self.stake)
            .and_then(|ratio| ratio.to_f64())
            .ok_or_else(invalid)?;

        if target_odds > max_target_odds {
            return Err(RequestError::TargetTooHigh {
                target: target_odds,
                limit: max_target_odds,
            });
        }

        let mut search = SearchRequest::new(target_odds).with_mode(self.mode);
        if let Some(alternatives) = self.alternatives {
            search = search.with_alternatives(alternatives);
        }
        if let Some(seed) = self.seed {
            search = search.with_seed(seed);
        }

        Ok(ValidatedRequest {
            stake: self.stake,
            win_amount: self.win_amount,
            target_odds,
            search,
        })
    }
}
