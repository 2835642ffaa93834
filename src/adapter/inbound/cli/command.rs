//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::adapter::outbound::catalog::{CatalogSource, CsvSheets};
use crate::search::LegMode;

/// Build multi-leg bets that land on a target payout
#[derive(Parser, Debug)]
#[command(name = "multileg")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a combination for a stake and desired win
    Search(SearchArgs),

    /// Summarize a bet catalog
    Catalog(CatalogArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `multileg config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file.
    Validate(ConfigPathArg),
}

/// Optional configuration file; defaults apply when omitted.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Where to read bets from. At least one source is required.
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = true)]
pub struct CatalogSourceArgs {
    /// JSON bet catalog; the fallback when CSV sheets are also given.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory holding the matchup and price CSV sheets.
    #[arg(long)]
    pub csv_dir: Option<PathBuf>,
}

impl CatalogSourceArgs {
    #[must_use]
    pub fn source(&self) -> CatalogSource {
        CatalogSource {
            csv: self.csv_dir.as_ref().map(CsvSheets::in_dir),
            json: self.catalog.clone(),
        }
    }
}

/// Arguments for `multileg search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: CatalogSourceArgs,

    /// Amount staked.
    #[arg(long)]
    pub stake: Decimal,

    /// Desired total return.
    #[arg(long = "win")]
    pub win_amount: Decimal,

    /// Candidates to aim for before stopping early.
    #[arg(long)]
    pub alternatives: Option<usize>,

    /// Leg ceiling to apply.
    #[arg(long, value_enum, default_value_t = LegMode::Single)]
    pub mode: LegMode,

    /// Seed for a reproducible search.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the search time budget, in milliseconds.
    #[arg(long)]
    pub time_budget_ms: Option<u64>,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for `multileg catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub source: CatalogSourceArgs,

    /// Leg ceiling used for the search-space estimate.
    #[arg(long, value_enum, default_value_t = LegMode::Single)]
    pub mode: LegMode,

    #[command(flatten)]
    pub config: ConfigPathArg,
}
