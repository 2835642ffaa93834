//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; every field has a default so an
//! empty file (or no file at all) yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use multileg::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("multileg.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

mod logging;
mod search;
mod settings;

pub use logging::LoggingConfig;
pub use search::SearchConfig;
pub use settings::Config;
