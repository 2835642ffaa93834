//! Bet catalog ingestion.

pub mod dto;
mod loader;
mod sheets;
mod source;

pub use loader::{build_catalog, load_catalog, parse_catalog};
pub use sheets::{load_csv_catalog, CsvSheets};
pub use source::CatalogSource;
