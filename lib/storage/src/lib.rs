//! # SkillMatch Storage
//!
//! File formats around the matcher: the CSV job catalog read once at
//! startup, and CSV export of ranked results.

pub mod export;
pub mod loader;

pub use export::{export_to_path, to_csv_string, write_results};
pub use loader::CatalogLoader;

use skillmatch_core::Error;

pub(crate) fn csv_error(err: csv::Error) -> Error {
    Error::Csv(err.to_string())
}
