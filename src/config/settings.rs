//! Top-level configuration aggregate.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{LoggingConfig, SearchConfig};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Initialize the global tracing subscriber.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let search = &self.search;

        if !(search.odds_tolerance.is_finite() && search.odds_tolerance > 0.0) {
            return Err(invalid("odds_tolerance", "must be greater than 0"));
        }
        if search.min_legs == 0 {
            return Err(invalid("min_legs", "must be greater than 0"));
        }
        if search.max_legs < search.min_legs {
            return Err(invalid("max_legs", "must be >= min_legs"));
        }
        if search.max_combined_legs < search.min_legs {
            return Err(invalid("max_combined_legs", "must be >= min_legs"));
        }
        if search.default_alternatives == 0 {
            return Err(invalid("default_alternatives", "must be greater than 0"));
        }
        if search.max_per_position == 0 {
            return Err(invalid("max_per_position", "must be greater than 0"));
        }
        if search.time_budget_ms == 0 {
            return Err(invalid("time_budget_ms", "must be greater than 0"));
        }
        if !(search.combinations_warn_threshold > 0.0) {
            return Err(invalid("combinations_warn_threshold", "must be greater than 0"));
        }
        if !(search.max_target_odds.is_finite() && search.max_target_odds > 1.0) {
            return Err(invalid("max_target_odds", "must be greater than 1"));
        }
        if !self.logging.is_known_format() {
            return Err(invalid("format", "must be \"pretty\" or \"json\""));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}
