//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::config::Config;
use crate::error::Result;
use crate::search::LegMode;

fn source(path: Option<&Path>) -> String {
    path.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
}

/// Execute `config show`.
pub fn execute_show(config: &Config, path: Option<&Path>) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source(path),
            "config": config,
        }));
        return Ok(());
    }

    let search = &config.search;

    output::section("Effective Configuration");
    output::field("Source", source(path));

    output::section("Search");
    output::field("Tolerance", search.odds_tolerance);
    output::field(
        "Legs",
        format!(
            "{}..={} (combined {})",
            search.min_legs,
            search.max_legs_for(LegMode::Single),
            search.max_legs_for(LegMode::Combined)
        ),
    );
    output::field("Default alternatives", search.default_alternatives);
    output::field("Per position", search.max_per_position);
    output::field("Time budget", format!("{}ms", search.time_budget_ms));
    output::field("Warn above", format!("{:.0}", search.combinations_warn_threshold));
    output::field("Max target", search.max_target_odds);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
///
/// Loading already rejected an invalid file; this reports the outcome.
pub fn execute_validate(config: &Config, path: Option<&Path>) -> Result<()> {
    config.validate()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "source": source(path),
            "valid": true,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", source(path));
    output::success("Config is valid");
    if path.is_none() {
        output::hint("pass -c <file> to validate a configuration file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label() {
        assert_eq!(source(None), "(defaults)");
        assert_eq!(source(Some(Path::new("multileg.toml"))), "multileg.toml");
    }

    #[test]
    fn test_validate_default_config() {
        assert!(execute_validate(&Config::default(), None).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.search.max_legs = 1;
        assert!(execute_validate(&config, None).is_err());
    }
}
