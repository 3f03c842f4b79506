//! History export handler

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, Response, StatusCode},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppState};
use wattwise_core::export::{self, ExportFormat};

/// Query parameters for export
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Output format (default: csv)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "csv".to_string()
}

/// GET /api/export - Download the history as CSV or JSON
pub async fn export_records(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportQuery>,
) -> Result<Response<Body>, AppError> {
    let format: ExportFormat = params
        .format
        .parse()
        .map_err(|_| AppError::bad_request("Invalid format. Use 'csv' or 'json'"))?;

    let records = state.session()?.records();
    let body = match format {
        ExportFormat::Csv => export::export_csv(&records)?,
        ExportFormat::Json => export::export_json(&records)?,
    };
    info!(count = records.len(), format = format.extension(), "Exported records");

    let filename = export::export_filename(format, Utc::now().date_naive());
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, format.content_type())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(body))?;

    Ok(response)
}
