//! Weight history and trend comparison.

use crate::db::EntryStore;
use crate::dto::{EntriesResponse, RecordWeightResponse};
use crate::error::AppResult;
use crate::models::weight_entry::{Comparison, NewEntry};

pub struct WeightService;

impl WeightService {
    /// Strict numeric comparison against the previous weight. No tolerance is
    /// applied, so near-equal floats are not `Same`.
    pub fn compare(current: f64, previous: Option<f64>) -> Option<Comparison> {
        let previous = previous?;
        Some(if current > previous {
            Comparison::Increased
        } else if current < previous {
            Comparison::Decreased
        } else {
            Comparison::Same
        })
    }

    pub async fn history(store: &dyn EntryStore) -> AppResult<EntriesResponse> {
        let entries = store.list_entries().await?;
        Ok(EntriesResponse { entries })
    }

    /// Upserts the entry, then compares it with the nearest earlier date.
    /// The comparison read runs after the write has been committed.
    pub async fn record(store: &dyn EntryStore, entry: NewEntry) -> AppResult<RecordWeightResponse> {
        let written = store.upsert_entry(entry).await?;

        let previous = store.latest_before(entry.entry_date).await?;
        let comparison = Self::compare(entry.weight_kg, previous.map(|p| p.weight_kg));

        tracing::info!(
            entry_id = written.id,
            entry_date = %written.entry_date,
            comparison = ?comparison,
            "Weight recorded"
        );

        Ok(RecordWeightResponse::new(written, comparison))
    }
}
