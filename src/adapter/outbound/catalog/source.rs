//! Catalog source selection.
//!
//! The CSV sheets are the primary source. When they are configured together
//! with a JSON catalog, the JSON file is only read if the sheets fail to load
//! or produce no games.

use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};

use super::loader::load_catalog;
use super::sheets::{load_csv_catalog, CsvSheets};
use crate::domain::BetCatalog;
use crate::error::{CatalogError, Result};

/// Where a catalog is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSource {
    pub csv: Option<CsvSheets>,
    pub json: Option<PathBuf>,
}

impl CatalogSource {
    #[must_use]
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self {
            csv: None,
            json: Some(path.into()),
        }
    }

    #[must_use]
    pub fn csv(sheets: CsvSheets) -> Self {
        Self {
            csv: Some(sheets),
            json: None,
        }
    }

    /// Use `path` when the CSV sheets yield nothing.
    #[must_use]
    pub fn with_json_fallback(mut self, path: impl Into<PathBuf>) -> Self {
        self.json = Some(path.into());
        self
    }

    /// Load the catalog, falling back from CSV to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoSource`] when neither source is set, the CSV
    /// error when only sheets are configured, or the JSON loader's error.
    pub fn load(&self) -> Result<BetCatalog> {
        match (&self.csv, &self.json) {
            (None, None) => Err(CatalogError::NoSource.into()),
            (None, Some(json)) => load_catalog(json),
            (Some(sheets), None) => load_csv_catalog(sheets),
            (Some(sheets), Some(json)) => match load_csv_catalog(sheets) {
                Ok(catalog) if !catalog.is_empty() => Ok(catalog),
                Ok(_) => {
                    info!(path = %json.display(), "CSV sheets yielded no games; using JSON catalog");
                    load_catalog(json)
                }
                Err(e) => {
                    warn!(error = %e, path = %json.display(), "CSV sheets failed; using JSON catalog");
                    load_catalog(json)
                }
            },
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.csv, &self.json) {
            (Some(sheets), Some(json)) => write!(
                f,
                "{} (fallback {})",
                sheets.matchups.display(),
                json.display()
            ),
            (Some(sheets), None) => write!(f, "{}", sheets.matchups.display()),
            (None, Some(json)) => write!(f, "{}", json.display()),
            (None, None) => f.write_str("none"),
        }
    }
}
