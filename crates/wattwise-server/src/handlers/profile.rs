//! Profile handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use wattwise_core::{NewProfile, Profile};

/// GET /api/profile - The saved profile, or null before the first save
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<Profile>>, AppError> {
    let session = state.session()?;
    Ok(Json(session.profile().cloned()))
}

/// PUT /api/profile - Replace the profile (age is clamped to 1-120)
pub async fn save_profile(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewProfile>,
) -> Result<Json<Profile>, AppError> {
    let mut session = state.session()?;
    let profile = session.save_profile(input).clone();
    Ok(Json(profile))
}
