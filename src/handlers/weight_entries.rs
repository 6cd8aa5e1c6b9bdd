use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;

use crate::dto::{EntriesResponse, RecordWeightResponse};
use crate::error::{AppError, AppResult};
use crate::models::weight_entry::RecordWeightRequest;
use crate::services::weight::WeightService;
use crate::AppState;

pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<EntriesResponse>> {
    let history = WeightService::history(state.store.as_ref()).await?;
    Ok(Json(history))
}

pub async fn record_weight(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<RecordWeightResponse>> {
    // Parsed by hand so malformed bodies share the JSON error envelope.
    let request: RecordWeightRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?;
    let entry = request.into_new_entry(Utc::now().date_naive())?;

    let response = WeightService::record(state.store.as_ref(), entry).await?;
    Ok(Json(response))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
