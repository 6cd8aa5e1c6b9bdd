//! # Weight Tracker — Request/Response DTOs
//!
//! Response shapes for every endpoint. Request bodies live next to the
//! model they produce (`models::weight_entry`).
//!
//! Conventions:
//! - `*Response` → serialized to client JSON
//! - Dates render as `YYYY-MM-DD`, timestamps as RFC 3339

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::weight_entry::{Comparison, WeightEntry};

// ============================================================================
// Common
// ============================================================================

/// Error envelope: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Weight entries
// ============================================================================

/// GET /api/weight-entries
#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<WeightEntry>,
}

/// POST /api/weight-entries
#[derive(Debug, Serialize)]
pub struct RecordWeightResponse {
    pub id: i64,
    pub weight_kg: f64,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    /// `null` when no earlier entry exists
    pub comparison: Option<Comparison>,
}

impl RecordWeightResponse {
    pub fn new(entry: WeightEntry, comparison: Option<Comparison>) -> Self {
        Self {
            id: entry.id,
            weight_kg: entry.weight_kg,
            entry_date: entry.entry_date,
            created_at: entry.created_at,
            comparison,
        }
    }
}
