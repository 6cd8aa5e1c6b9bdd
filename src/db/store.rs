//! # Entry Storage
//!
//! The `EntryStore` trait is the seam between request handling and the
//! relational store. Handlers only see the trait; `PgEntryStore` is the
//! production backend.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::weight_entry::{NewEntry, WeightEntry};

pub type StoreResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All entries, most recent `entry_date` first.
    async fn list_entries(&self) -> StoreResult<Vec<WeightEntry>>;

    /// Insert an entry, or overwrite `weight_kg` of the entry already stored
    /// for that date. `id` and `created_at` of an existing row are kept.
    /// The write is committed before this returns.
    async fn upsert_entry(&self, entry: NewEntry) -> StoreResult<WeightEntry>;

    /// The entry with the greatest `entry_date` strictly before `date`.
    async fn latest_before(&self, date: NaiveDate) -> StoreResult<Option<WeightEntry>>;

    /// Round-trip to the backend, used by readiness checks.
    async fn ping(&self) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct PgEntryStore {
    pool: PgPool,
}

impl PgEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn list_entries(&self) -> StoreResult<Vec<WeightEntry>> {
        sqlx::query_as::<_, WeightEntry>(
            r#"
            SELECT id, weight_kg, entry_date, created_at
            FROM weight_entries
            ORDER BY entry_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn upsert_entry(&self, entry: NewEntry) -> StoreResult<WeightEntry> {
        // Dropping the transaction on an error path rolls it back and
        // returns the connection to the pool.
        let mut tx = self.pool.begin().await?;

        let written = sqlx::query_as::<_, WeightEntry>(
            r#"
            INSERT INTO weight_entries (weight_kg, entry_date)
            VALUES ($1, $2)
            ON CONFLICT (entry_date) DO UPDATE SET
                weight_kg = EXCLUDED.weight_kg
            RETURNING id, weight_kg, entry_date, created_at
            "#,
        )
        .bind(entry.weight_kg)
        .bind(entry.entry_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(written)
    }

    async fn latest_before(&self, date: NaiveDate) -> StoreResult<Option<WeightEntry>> {
        sqlx::query_as::<_, WeightEntry>(
            r#"
            SELECT id, weight_kg, entry_date, created_at
            FROM weight_entries
            WHERE entry_date < $1
            ORDER BY entry_date DESC
            LIMIT 1
            "#,
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
    }
}
