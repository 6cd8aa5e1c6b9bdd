//! In-memory `EntryStore` for handler and service tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use super::store::{EntryStore, StoreResult};
use crate::models::weight_entry::{NewEntry, WeightEntry};

#[derive(Default)]
pub struct MemoryEntryStore {
    inner: Mutex<Inner>,
    failing: AtomicBool,
    fail_next_lookup: AtomicBool,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<NaiveDate, WeightEntry>,
    next_id: i64,
    writes: usize,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails as if the pool were exhausted.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// The next `latest_before` call fails; writes keep succeeding.
    pub fn fail_next_lookup(&self) {
        self.fail_next_lookup.store(true, Ordering::SeqCst);
    }

    pub async fn write_count(&self) -> usize {
        self.inner.lock().await.writes
    }

    pub async fn get(&self, date: NaiveDate) -> Option<WeightEntry> {
        self.inner.lock().await.rows.get(&date).cloned()
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn list_entries(&self) -> StoreResult<Vec<WeightEntry>> {
        self.check()?;
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().rev().cloned().collect())
    }

    async fn upsert_entry(&self, entry: NewEntry) -> StoreResult<WeightEntry> {
        self.check()?;
        let mut inner = self.inner.lock().await;
        inner.writes += 1;

        if let Some(existing) = inner.rows.get_mut(&entry.entry_date) {
            existing.weight_kg = entry.weight_kg;
            return Ok(existing.clone());
        }

        inner.next_id += 1;
        let row = WeightEntry {
            id: inner.next_id,
            weight_kg: entry.weight_kg,
            entry_date: entry.entry_date,
            created_at: Utc::now(),
        };
        inner.rows.insert(entry.entry_date, row.clone());
        Ok(row)
    }

    async fn latest_before(&self, date: NaiveDate) -> StoreResult<Option<WeightEntry>> {
        self.check()?;
        if self.fail_next_lookup.swap(false, Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let inner = self.inner.lock().await;
        Ok(inner
            .rows
            .range(..date)
            .next_back()
            .map(|(_, row)| row.clone()))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }
}
