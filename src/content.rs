//! # Showcase Content Loading
//!
//! Reads the case studies from a JSON file so the copy can change without a
//! rebuild. The file holds an array of records in display order:
//!
//! ```json
//! [
//!   {
//!     "label": "Apex Fintech",
//!     "quote": "Replaced a 4-person ops team with bots.",
//!     "metric": "+142 hrs/mo saved",
//!     "detail": "KYC verification, document parsing, CRM updates"
//!   }
//! ]
//! ```
//!
//! ## Error Handling
//!
//! Every failure is reported through [`ContentError`]. The caller is expected to
//! fall back to [`crate::fallback::case_studies`] rather than abort, the same way
//! a missing config falls back to defaults.

use crate::{DisplayRecord, ItemStore, ShowcaseError};
use std::{fs, io, path::Path};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading showcase content.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read
    #[error("content IO: {0}")]
    Io(#[from] io::Error),

    /// Content file is not a JSON array of records
    #[error("content parse: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content parsed but cannot back a showcase
    #[error("content rejected: {0}")]
    Store(#[from] ShowcaseError),
}

/// Load an [`ItemStore`] from the JSON file at `path`.
///
/// # Example
/// ```no_run
/// use showcase_lib::{content, fallback};
///
/// let store = content::load("showcase.json").unwrap_or_else(|err| {
///     eprintln!("Failed to load showcase content: {}", err);
///     fallback::case_studies()
/// });
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<ItemStore, ContentError> {
    let data = fs::read(path.as_ref())?;
    let store = parse(&data)?;
    debug!(
        path = %path.as_ref().display(),
        records = store.len(),
        "loaded showcase content"
    );
    Ok(store)
}

/// Parse a JSON array of records.
pub fn parse(data: &[u8]) -> Result<ItemStore, ContentError> {
    let records: Vec<DisplayRecord> = serde_json::from_slice(data)?;
    Ok(ItemStore::new(records)?)
}

/// Write `store` to `path` as pretty JSON.
pub fn save<P: AsRef<Path>>(store: &ItemStore, path: P) -> Result<(), ContentError> {
    let data = serde_json::to_vec_pretty(store)?;
    fs::write(path, data)?;
    Ok(())
}
