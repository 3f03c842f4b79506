//! Insight handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use wattwise_core::InsightReport;

/// GET /api/insights - Efficiency score and up to five recommendations
///
/// Returns null until at least one day is recorded.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<InsightReport>>, AppError> {
    let records = state.session()?.records();
    Ok(Json(state.insights.report(&records)))
}
