use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while loading a bet catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to read CSV catalog: {0}")]
    Csv(#[source] csv::Error),

    #[error("no catalog source given; pass a JSON catalog or a CSV directory")]
    NoSource,
}

/// Caller errors rejected before the search starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("target odds must be a positive number, got {target}")]
    InvalidTarget { target: f64 },

    #[error("at least one alternative must be requested")]
    InvalidAlternatives,

    #[error("invalid leg bounds: min {min}, max {max}")]
    InvalidLegBounds { min: usize, max: usize },
}

/// Stake / win validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("stake must be positive, and desired win must be greater than stake (stake {stake}, win {win})")]
    InvalidAmounts { stake: Decimal, win: Decimal },

    #[error("target odds of {target:.2} are too high (limit {limit}); reduce the desired win or increase the stake")]
    TargetTooHigh { target: f64, limit: f64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error stems from caller input rather than the environment.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Search(_) | Error::Request(_))
    }
}
