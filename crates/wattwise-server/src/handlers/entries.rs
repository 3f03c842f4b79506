//! Daily entry handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState};
use wattwise_core::{calculator::EnergyEstimate, DailyEntry, DailyRecord};

/// Query parameters for clearing the history
#[derive(Debug, Deserialize)]
pub struct ClearQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub removed: usize,
}

/// POST /api/estimate - Live breakdown for the current selection, nothing saved
pub async fn estimate_entry(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<DailyEntry>,
) -> Result<Json<EnergyEstimate>, AppError> {
    let session = state.session()?;
    Ok(Json(session.estimate(&entry)?))
}

/// GET /api/entries - All records, oldest first
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DailyRecord>>, AppError> {
    let session = state.session()?;
    Ok(Json(session.records()))
}

/// POST /api/entries - Save a day's consumption, replacing any record for that date
pub async fn save_entry(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<DailyEntry>,
) -> Result<Json<DailyRecord>, AppError> {
    let mut session = state.session()?;
    let record = session.record_entry(entry)?;
    Ok(Json(record))
}

/// GET /api/entries/:date - One recorded day
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<DailyRecord>, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("Invalid date format (use YYYY-MM-DD)"))?;

    let session = state.session()?;
    session
        .record(date)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(&format!("No record for {}", date)))
}

/// DELETE /api/entries?confirm=true - Remove every record (profile is kept)
pub async fn clear_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClearQuery>,
) -> Result<Json<ClearResponse>, AppError> {
    let mut session = state.session()?;
    let removed = session.clear_records(params.confirm)?;
    info!(removed, "History cleared via API");
    Ok(Json(ClearResponse { removed }))
}
