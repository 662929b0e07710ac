use chrono::{DateTime, Utc};

use crate::models::coin::CoinRecord;

/// The last successfully fetched market snapshot.
///
/// Replacement is all-or-nothing: aggregates over the snapshot must never
/// mix records from two fetches, so there is no per-record update.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshotStore {
    records: Vec<CoinRecord>,
    last_updated: Option<DateTime<Utc>>,
    /// Number of successful replacements so far
    generation: u64,
}

impl MarketSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the snapshot wholesale with a freshly fetched one.
    pub fn replace(&mut self, records: Vec<CoinRecord>) {
        log::info!(
            "Market snapshot replaced: {} -> {} coins",
            self.records.len(),
            records.len()
        );
        self.records = records;
        self.last_updated = Some(Utc::now());
        self.generation += 1;
    }

    /// Latest snapshot; empty before the first successful fetch.
    #[must_use]
    pub fn current(&self) -> &[CoinRecord] {
        &self.records
    }

    /// When the snapshot was last replaced, or `None` if it never was.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
