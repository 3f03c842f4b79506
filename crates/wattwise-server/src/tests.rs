//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(None, ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn save_two_bhk_profile(app: &Router) {
    let response = send(
        app,
        "PUT",
        "/api/profile",
        Some(serde_json::json!({
            "name": "Asha",
            "age": 31,
            "city": "Pune",
            "area": "Kothrud",
            "housing_type": "Flat",
            "dwelling_size": "2BHK"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

async fn save_entry(app: &Router, date: &str, appliances: &[&str]) -> serde_json::Value {
    let response = send(
        app,
        "POST",
        "/api/entries",
        Some(serde_json::json!({
            "date": date,
            "appliances": appliances,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    get_body_json(response).await
}

fn approx(value: &serde_json::Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-9
}

// ========== Catalog API Tests ==========

#[tokio::test]
async fn test_catalog() {
    let app = setup_test_app();

    let response = send(&app, "GET", "/api/catalog", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let appliances = json["appliances"].as_array().unwrap();
    assert_eq!(appliances.len(), 8);

    let ac = appliances.iter().find(|a| a["name"] == "AC").unwrap();
    assert!(approx(&ac["daily_draw"], 3.0));
    assert_eq!(ac["hour_adjustable"], true);
    assert!(approx(&ac["default_usage_hours"], 8.0));

    let fridge = appliances
        .iter()
        .find(|a| a["name"] == "Refrigerator")
        .unwrap();
    assert_eq!(fridge["hour_adjustable"], false);
    assert!(fridge["default_usage_hours"].is_null());

    let sizes = json["dwelling_sizes"].as_array().unwrap();
    assert_eq!(sizes.len(), 3);
    assert_eq!(sizes[1]["size"], "2BHK");
    assert!(approx(&sizes[1]["base_energy"], 3.6));
    assert!(approx(&json["rate_per_kwh"], 5.0));
}

// ========== Profile API Tests ==========

#[tokio::test]
async fn test_profile_starts_empty() {
    let app = setup_test_app();

    let response = send(&app, "GET", "/api/profile", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(get_body_json(response).await.is_null());
}

#[tokio::test]
async fn test_save_profile_clamps_age() {
    let app = setup_test_app();

    let response = send(
        &app,
        "PUT",
        "/api/profile",
        Some(serde_json::json!({
            "name": "  Ravi ",
            "age": 150,
            "dwelling_size": "1BHK"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["name"], "Ravi");
    assert_eq!(json["age"], 120);
    assert_eq!(json["housing_type"], "Flat");

    let response = send(&app, "GET", "/api/profile", None).await;
    let json = get_body_json(response).await;
    assert_eq!(json["dwelling_size"], "1BHK");
}

// ========== Entry API Tests ==========

#[tokio::test]
async fn test_estimate_requires_profile() {
    let app = setup_test_app();

    let response = send(
        &app,
        "POST",
        "/api/estimate",
        Some(serde_json::json!({ "appliances": ["AC"] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Profile incomplete"));
}

#[tokio::test]
async fn test_save_entry_requires_profile() {
    let app = setup_test_app();

    let response = send(
        &app,
        "POST",
        "/api/entries",
        Some(serde_json::json!({ "date": "2024-01-01", "appliances": ["TV"] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(&app, "GET", "/api/entries", None).await;
    assert_eq!(get_body_json(response).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_estimate_with_usage_hours() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;

    let response = send(
        &app,
        "POST",
        "/api/estimate",
        Some(serde_json::json!({
            "appliances": ["AC", "Refrigerator"],
            "usage_hours": { "AC": 4.0 }
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(approx(&json["base_energy"], 3.6));
    assert!(approx(&json["appliance_energy"], 4.5));
    assert!(approx(&json["total_energy"], 8.1));
    assert!(approx(&json["estimated_cost"], 40.5));

    // Nothing is saved by an estimate
    let response = send(&app, "GET", "/api/entries", None).await;
    assert!(get_body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_and_get_entry() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;

    let record = save_entry(&app, "2024-01-01", &["Refrigerator"]).await;
    assert!(approx(&record["base_energy"], 3.6));
    assert!(approx(&record["appliance_energy"], 3.0));
    assert!(approx(&record["total_energy"], 6.6));

    let response = send(&app, "GET", "/api/entries/2024-01-01", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["appliances"], serde_json::json!(["Refrigerator"]));
}

#[tokio::test]
async fn test_save_entry_stores_catalog_names() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;

    let record = save_entry(&app, "2024-01-03", &["AC", "ac", "fridge"]).await;
    assert_eq!(record["appliances"], serde_json::json!(["AC"]));
    assert!(approx(&record["appliance_energy"], 3.0));
    assert!(approx(&record["total_energy"], 6.6));
}

#[tokio::test]
async fn test_save_entry_same_date_replaces() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;

    save_entry(&app, "2024-01-05", &["AC"]).await;
    save_entry(&app, "2024-01-05", &["TV"]).await;

    let response = send(&app, "GET", "/api/entries", None).await;
    let json = get_body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(approx(&entries[0]["total_energy"], 4.1));
}

#[tokio::test]
async fn test_list_entries_sorted_by_date() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;

    save_entry(&app, "2024-01-03", &[]).await;
    save_entry(&app, "2024-01-01", &[]).await;
    save_entry(&app, "2024-01-02", &[]).await;

    let response = send(&app, "GET", "/api/entries", None).await;
    let json = get_body_json(response).await;
    let dates: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
}

#[tokio::test]
async fn test_get_entry_missing_and_invalid() {
    let app = setup_test_app();

    let response = send(&app, "GET", "/api/entries/2024-02-01", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "GET", "/api/entries/yesterday", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clear_entries_requires_confirmation() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;
    save_entry(&app, "2024-01-01", &["TV"]).await;
    save_entry(&app, "2024-01-02", &["TV"]).await;

    let response = send(&app, "DELETE", "/api/entries", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "GET", "/api/entries", None).await;
    assert_eq!(get_body_json(response).await.as_array().unwrap().len(), 2);

    let response = send(&app, "DELETE", "/api/entries?confirm=true", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(get_body_json(response).await["removed"], 2);

    let response = send(&app, "GET", "/api/analytics/summary", None).await;
    assert!(get_body_json(response).await.is_null());

    // Profile survives a history clear
    let response = send(&app, "GET", "/api/profile", None).await;
    assert!(!get_body_json(response).await.is_null());
}

// ========== Analytics API Tests ==========

#[tokio::test]
async fn test_analytics_empty() {
    let app = setup_test_app();

    for uri in [
        "/api/analytics/summary",
        "/api/analytics/breakdown",
        "/api/analytics/trend",
        "/api/insights",
    ] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(get_body_json(response).await.is_null(), "{}", uri);
    }

    for uri in ["/api/analytics/daily", "/api/analytics/weekly"] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(get_body_json(response).await.as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_analytics_with_records() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;
    // 2024-01-01 and 2024-01-02 share ISO week 1; 2024-01-08 starts week 2
    save_entry(&app, "2024-01-01", &["Refrigerator"]).await;
    save_entry(&app, "2024-01-02", &["Refrigerator", "AC"]).await;
    save_entry(&app, "2024-01-08", &[]).await;

    let response = send(&app, "GET", "/api/analytics/summary", None).await;
    let summary = get_body_json(response).await;
    assert_eq!(summary["days_tracked"], 3);
    // (6.6 + 9.6 + 3.6) / 3
    assert!(approx(&summary["average_daily"], 6.6));
    assert!(approx(&summary["highest_daily"], 9.6));
    assert!(approx(&summary["monthly_estimate"], 198.0));

    let response = send(&app, "GET", "/api/analytics/daily", None).await;
    let daily = get_body_json(response).await;
    assert_eq!(daily.as_array().unwrap().len(), 3);
    assert_eq!(daily[0]["date"], "2024-01-01");

    let response = send(&app, "GET", "/api/analytics/breakdown", None).await;
    let breakdown = get_body_json(response).await;
    let categories = breakdown["categories"].as_array().unwrap();
    assert_eq!(categories[0]["category"], "Base Energy");
    assert!(approx(&categories[0]["average"], 3.6));
    assert!(approx(&categories[1]["average"], 3.0));

    let response = send(&app, "GET", "/api/analytics/weekly", None).await;
    let weekly = get_body_json(response).await;
    let weeks = weekly.as_array().unwrap();
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0]["week"], 1);
    assert!(approx(&weeks[0]["average"], 8.1));
    assert!(approx(&weeks[1]["average"], 3.6));

    let response = send(&app, "GET", "/api/analytics/trend", None).await;
    let trend = get_body_json(response).await;
    assert_eq!(trend["trend"], "stable");
}

// ========== Insights / Dashboard API Tests ==========

#[tokio::test]
async fn test_insights_report() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;
    save_entry(&app, "2024-01-01", &["Refrigerator"]).await;

    let response = send(&app, "GET", "/api/insights", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["score"], "good");
    assert_eq!(json["stars"], 4);
    assert!(approx(&json["monthly_projection_kwh"], 198.0));
    assert!(approx(&json["monthly_projection_cost"], 990.0));

    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[0]["kind"], "natural_light");
}

#[tokio::test]
async fn test_dashboard() {
    let app = setup_test_app();

    let response = send(&app, "GET", "/api/dashboard", None).await;
    let json = get_body_json(response).await;
    assert_eq!(json["profile_complete"], false);
    assert_eq!(json["record_count"], 0);
    assert!(json["score"].is_null());

    save_two_bhk_profile(&app).await;
    save_entry(&app, "2024-01-01", &[]).await;
    save_entry(&app, "2024-01-02", &["TV"]).await;

    let response = send(&app, "GET", "/api/dashboard", None).await;
    let json = get_body_json(response).await;
    assert_eq!(json["profile_complete"], true);
    assert_eq!(json["record_count"], 2);
    assert_eq!(json["latest"]["date"], "2024-01-02");
    assert_eq!(json["score"], "excellent");
    assert_eq!(json["stars"], 5);
}

// ========== Export API Tests ==========

#[tokio::test]
async fn test_export_csv() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;
    save_entry(&app, "2024-01-01", &["Refrigerator", "TV"]).await;

    let response = send(&app, "GET", "/api/export", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["content-type"], "text/csv; charset=utf-8");
    let disposition = headers["content-disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"energy_consumption_"));
    assert!(disposition.ends_with(".csv\""));

    let body = get_body_text(response).await;
    let mut lines = body.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,total_energy,base_energy,appliance_energy,appliances,notes,timestamp"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("2024-01-01,"));
    assert!(row.contains(",3.6,3.5,Refrigerator;TV,,"));
}

#[tokio::test]
async fn test_export_json() {
    let app = setup_test_app();
    save_two_bhk_profile(&app).await;
    save_entry(&app, "2024-01-01", &["Refrigerator"]).await;

    let response = send(&app, "GET", "/api/export?format=json", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");

    let json = get_body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert!(approx(&json[0]["total_energy"], 6.6));
}

#[tokio::test]
async fn test_export_invalid_format() {
    let app = setup_test_app();

    let response = send(&app, "GET", "/api/export?format=xlsx", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Server Configuration Tests ==========

#[tokio::test]
async fn test_security_headers() {
    let app = setup_test_app();

    let response = send(&app, "GET", "/api/catalog", None).await;
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers["content-security-policy"]
        .to_str()
        .unwrap()
        .contains("frame-ancestors 'none'"));
}

#[tokio::test]
async fn test_cors_follows_configured_origins() {
    let config = ServerConfig {
        allowed_origins: parse_origins("http://localhost:5173"),
    };
    let app = create_router(None, config);

    let request = |origin: &str| {
        Request::builder()
            .uri("/api/catalog")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(request("http://localhost:5173")).await.unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );

    let response = app.clone().oneshot(request("https://evil.example")).await.unwrap();
    assert!(response.headers().get("access-control-allow-origin").is_none());

    // Same-origin only without configuration
    let response = setup_test_app()
        .oneshot(request("http://localhost:5173"))
        .await
        .unwrap();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_static_dir_fallback() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>WattWise</h1>").unwrap();

    let app = create_router(dir.path().to_str(), ServerConfig::default());

    let response = send(&app, "GET", "/index.html", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(get_body_text(response).await.contains("WattWise"));

    // API routes still take priority
    let response = send(&app, "GET", "/api/catalog", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn test_parse_origins() {
    assert_eq!(
        parse_origins(" http://localhost:5173, ,https://energy.example "),
        vec!["http://localhost:5173", "https://energy.example"]
    );
    assert!(parse_origins("").is_empty());
}
