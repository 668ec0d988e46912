//! # Showcase Carousel Core Library
//!
//! This library provides the rotating case-study showcase that sits in the
//! "Proven results" section of the agency landing page. Everything else on
//! that page is static markup; the showcase is the one piece with state,
//! timing and a lifecycle.
//!
//! ## Design Philosophy
//!
//! ### Fixed Content
//! - **Immutable records**: [`DisplayRecord`] values are supplied once and never mutated
//! - **Non-empty store**: [`ItemStore`] refuses to be built from zero records, so every
//!   index the component produces points at a real record
//!
//! ### Rotation
//! The showcase advances one record every rotation period (4000 ms by default):
//! - **Wrap-around**: after the last record the showcase returns to the first
//! - **Manual jumps**: selecting an indicator writes the index directly; the timer
//!   keeps its own cadence and is not restarted
//!
//! ### Data Flow
//! 1. **Content**: load records from JSON, or use the built-in case studies
//! 2. **Mount**: [`showcase::RotatingShowcase::mount`] starts the scheduler
//! 3. **Tick / select**: selection changes are published to subscribers
//! 4. **Render**: [`renderer::render`] projects the selection into a [`renderer::Frame`]
//!
//! ## Core Types
//!
//! - [`DisplayRecord`]: one case study (label, quote, metric, detail)
//! - [`ItemStore`]: the ordered, fixed sequence of records
//! - [`ShowcaseError`]: contract violations raised by the core

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Module declarations
pub mod config;
pub mod content;
pub mod fallback;
pub mod renderer;
pub mod scheduler;
pub mod selection;
pub mod showcase;

/// Errors raised when a caller breaks the showcase contract.
///
/// None of these are environmental failures: they are not retried and are
/// surfaced immediately instead of being clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    /// The rotation period must be strictly positive
    #[error("rotation period must be greater than zero")]
    InvalidPeriod,

    /// An index outside `[0, len)` was supplied
    #[error("index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// Rotation was attempted over zero records
    #[error("showcase has no records")]
    EmptyStore,
}

/// A single case study shown by the showcase.
///
/// # Example
/// ```
/// use showcase_lib::DisplayRecord;
///
/// let record = DisplayRecord {
///     label: "Nova SaaS".to_string(),
///     quote: "Inbound support deflected by 88%.".to_string(),
///     metric: "88% deflection".to_string(),
///     detail: "Zendesk + Slack + billing integrations".to_string(),
/// };
/// assert_eq!(record.label, "Nova SaaS");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    /// Client name shown in the badge
    pub label: String,
    /// Testimonial text
    pub quote: String,
    /// Headline result, e.g. "+142 hrs/mo saved"
    pub metric: String,
    /// Supporting detail shown next to the metric
    pub detail: String,
}

/// Ordered, fixed sequence of [`DisplayRecord`]s.
///
/// The store has no mutation operations; it is built once and shared for the
/// lifetime of the showcase.
///
/// # Example
/// ```
/// use showcase_lib::{fallback, ItemStore, ShowcaseError};
///
/// let store = fallback::case_studies();
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.at(0).unwrap().label, "Apex Fintech");
/// assert!(matches!(store.at(3), Err(ShowcaseError::IndexOutOfRange { .. })));
/// assert_eq!(ItemStore::new(vec![]).unwrap_err(), ShowcaseError::EmptyStore);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemStore {
    records: Vec<DisplayRecord>,
}

impl ItemStore {
    /// Build a store from an ordered sequence of records.
    ///
    /// Fails with [`ShowcaseError::EmptyStore`] when `records` is empty.
    pub fn new(records: Vec<DisplayRecord>) -> Result<Self, ShowcaseError> {
        if records.is_empty() {
            return Err(ShowcaseError::EmptyStore);
        }
        Ok(Self { records })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed store.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, or [`ShowcaseError::IndexOutOfRange`].
    pub fn at(&self, index: usize) -> Result<&DisplayRecord, ShowcaseError> {
        self.records.get(index).ok_or(ShowcaseError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayRecord> {
        self.records.iter()
    }
}

impl<'de> Deserialize<'de> for ItemStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let records = Vec::<DisplayRecord>::deserialize(deserializer)?;
        ItemStore::new(records).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str) -> DisplayRecord {
        DisplayRecord {
            label: label.to_string(),
            quote: format!("{label} quote"),
            metric: "1x".to_string(),
            detail: "detail".to_string(),
        }
    }

    #[test]
    fn test_store_rejects_empty() {
        assert_eq!(ItemStore::new(vec![]), Err(ShowcaseError::EmptyStore));
    }

    #[test]
    fn test_store_at_bounds() {
        let store = ItemStore::new(vec![record("a"), record("b")]).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.at(1).unwrap().label, "b");
        assert_eq!(
            store.at(2),
            Err(ShowcaseError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_store_deserialize_rejects_empty_array() {
        let parsed = serde_json::from_str::<ItemStore>("[]");
        assert!(parsed.is_err());

        let store: ItemStore = serde_json::from_str(
            r#"[{"label":"a","quote":"q","metric":"m","detail":"d"}]"#,
        )
        .unwrap();
        assert_eq!(store.iter().count(), 1);
    }
}
