//! WattWise Web Server
//!
//! Axum-based JSON API behind the energy dashboard.
//!
//! The server owns a single in-memory [`Session`] (one household, no
//! persistence across restarts). Security features:
//! - Restrictive CORS policy (origins opt-in via `WATTWISE_ALLOWED_ORIGINS`)
//! - Security headers on every response
//! - Sanitized error responses

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info};

use wattwise_core::{InsightEngine, Session};

mod handlers;

/// Environment variable holding comma-separated allowed CORS origins
pub const ALLOWED_ORIGINS_ENV: &str = "WATTWISE_ALLOWED_ORIGINS";

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        let origins = std::env::var(ALLOWED_ORIGINS_ENV).unwrap_or_default();
        Self {
            allowed_origins: parse_origins(&origins),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(s: &str) -> Vec<String> {
    s.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

/// Shared application state
pub struct AppState {
    pub session: Mutex<Session>,
    pub insights: InsightEngine,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Mutex::new(Session::new()),
            insights: InsightEngine::new(),
        }
    }

    /// Lock the household session for the duration of one request
    pub fn session(&self) -> Result<MutexGuard<'_, Session>, AppError> {
        self.session
            .lock()
            .map_err(|_| AppError::internal("Session state is unavailable"))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the application router
pub fn create_router(static_dir: Option<&str>, config: ServerConfig) -> Router {
    let state = Arc::new(AppState::new());

    let api_routes = Router::new()
        // Catalog
        .route("/catalog", get(handlers::get_catalog))
        // Profile
        .route(
            "/profile",
            get(handlers::get_profile).put(handlers::save_profile),
        )
        // Entries
        .route("/estimate", post(handlers::estimate_entry))
        .route(
            "/entries",
            get(handlers::list_entries)
                .post(handlers::save_entry)
                .delete(handlers::clear_entries),
        )
        .route("/entries/:date", get(handlers::get_entry))
        // Analytics
        .route("/analytics/summary", get(handlers::analytics_summary))
        .route("/analytics/daily", get(handlers::analytics_daily))
        .route("/analytics/breakdown", get(handlers::analytics_breakdown))
        .route("/analytics/weekly", get(handlers::analytics_weekly))
        .route("/analytics/trend", get(handlers::analytics_trend))
        // Insights
        .route("/insights", get(handlers::get_insights))
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        // Export
        .route("/export", get(handlers::export_records));

    // Build CORS layer
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    // CSP: same-origin scripts, inline styles for the chart widgets
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors 'none'"
    );

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    // Serve the dashboard UI if a directory was provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(host: &str, port: u16, static_dir: Option<&str>) -> anyhow::Result<()> {
    serve_with_config(host, port, static_dir, ServerConfig::from_env()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if !config.allowed_origins.is_empty() {
        info!(origins = ?config.allowed_origins, "CORS origins allowed");
    }

    let app = create_router(static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn conflict(msg: &str) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<wattwise_core::Error> for AppError {
    fn from(err: wattwise_core::Error) -> Self {
        use wattwise_core::Error;

        match err {
            Error::ProfileIncomplete => Self::conflict(&err.to_string()),
            Error::ConfirmationRequired(_) | Error::InvalidData(_) => {
                Self::bad_request(&err.to_string())
            }
            Error::NotFound(_) => Self::not_found(&err.to_string()),
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                // Return generic message to client
                message: "An internal error occurred".to_string(),
                // Keep full error for logging
                internal: Some(other.into()),
            },
        }
    }
}

impl From<axum::http::Error> for AppError {
    fn from(err: axum::http::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "An internal error occurred".to_string(),
            internal: Some(err.into()),
        }
    }
}

#[cfg(test)]
mod tests;
