//! Dashboard handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};
use wattwise_core::{analytics, DailyRecord, EfficiencyScore, EnergySummary, Profile};

/// Landing-page overview
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// False until a profile is saved; the UI routes to the profile form
    pub profile_complete: bool,
    pub profile: Option<Profile>,
    pub record_count: usize,
    pub latest: Option<DailyRecord>,
    pub summary: Option<EnergySummary>,
    pub score: Option<EfficiencyScore>,
    pub stars: Option<u8>,
}

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, AppError> {
    let (profile, records) = {
        let session = state.session()?;
        (session.profile().cloned(), session.records())
    };

    let summary = analytics::summarize(&records);
    let score = summary
        .as_ref()
        .map(|s| EfficiencyScore::from_average(s.average_daily));

    Ok(Json(DashboardResponse {
        profile_complete: profile.is_some(),
        profile,
        record_count: records.len(),
        latest: records.last().cloned(),
        summary,
        score,
        stars: score.map(|s| s.stars()),
    }))
}
