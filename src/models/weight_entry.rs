use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

/// One weight observation. `entry_date` is unique across the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WeightEntry {
    pub id: i64,
    pub weight_kg: f64,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Direction of a new weight relative to the nearest earlier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Increased,
    Decreased,
    Same,
}

/// Validated input for an upsert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewEntry {
    pub weight_kg: f64,
    pub entry_date: NaiveDate,
}

/// `weight_kg` arrives either as a JSON number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    Number(f64),
    Text(String),
}

impl WeightInput {
    pub fn to_kg(&self) -> AppResult<f64> {
        let value = match self {
            WeightInput::Number(n) => *n,
            WeightInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| AppError::BadRequest("weight_kg must be a number".into()))?,
        };

        // serde_json cannot round-trip NaN or infinity
        if !value.is_finite() {
            return Err(AppError::BadRequest("weight_kg must be a finite number".into()));
        }
        Ok(value)
    }
}

/// POST body
#[derive(Debug, Deserialize)]
pub struct RecordWeightRequest {
    pub weight_kg: Option<WeightInput>,
    pub entry_date: Option<String>,
}

impl RecordWeightRequest {
    /// Coerces the raw body into a [`NewEntry`], using `today` when no date is given.
    pub fn into_new_entry(self, today: NaiveDate) -> AppResult<NewEntry> {
        let weight_kg = self
            .weight_kg
            .ok_or_else(|| AppError::BadRequest("weight_kg is required".into()))?
            .to_kg()?;

        let entry_date = match self.entry_date {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                AppError::BadRequest("entry_date must be formatted as YYYY-MM-DD".into())
            })?,
            None => today,
        };

        Ok(NewEntry {
            weight_kg,
            entry_date,
        })
    }
}
