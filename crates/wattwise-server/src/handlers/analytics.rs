//! Analytics handlers
//!
//! Every endpoint answers over the full history. Aggregates with no data
//! serialize as `null` and series as empty arrays.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use wattwise_core::analytics::{
    self, DailyPoint, EnergyBreakdown, EnergySummary, TrendComparison, WeeklyAverage,
};

/// GET /api/analytics/summary
pub async fn analytics_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<EnergySummary>>, AppError> {
    let records = state.session()?.records();
    Ok(Json(analytics::summarize(&records)))
}

/// GET /api/analytics/daily - Line chart series
pub async fn analytics_daily(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DailyPoint>>, AppError> {
    let records = state.session()?.records();
    Ok(Json(analytics::daily_series(&records)))
}

/// GET /api/analytics/breakdown - Pie chart of base vs appliance averages
pub async fn analytics_breakdown(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<EnergyBreakdown>>, AppError> {
    let records = state.session()?.records();
    Ok(Json(analytics::breakdown(&records)))
}

/// GET /api/analytics/weekly - Bar chart of ISO-week averages
pub async fn analytics_weekly(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WeeklyAverage>>, AppError> {
    let records = state.session()?.records();
    Ok(Json(analytics::weekly_average(&records)))
}

/// GET /api/analytics/trend
pub async fn analytics_trend(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<TrendComparison>>, AppError> {
    let records = state.session()?.records();
    Ok(Json(analytics::trend_comparison(&records)))
}
