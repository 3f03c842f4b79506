//! Catalog handler

use axum::Json;
use serde::Serialize;

use wattwise_core::models::{Appliance, DwellingSize, HousingType, RATE_PER_KWH};

#[derive(Debug, Serialize)]
pub struct ApplianceInfo {
    pub name: &'static str,
    pub daily_draw: f64,
    pub hour_adjustable: bool,
    /// Prefill for the usage-hours input; absent for flat-draw appliances
    pub default_usage_hours: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DwellingSizeInfo {
    pub size: &'static str,
    pub rooms: u32,
    pub base_energy: f64,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub appliances: Vec<ApplianceInfo>,
    pub dwelling_sizes: Vec<DwellingSizeInfo>,
    pub housing_types: Vec<&'static str>,
    pub rate_per_kwh: f64,
}

/// GET /api/catalog - Appliance draws and dwelling sizes for the entry form
pub async fn get_catalog() -> Json<CatalogResponse> {
    let appliances = Appliance::ALL
        .iter()
        .map(|a| ApplianceInfo {
            name: a.as_str(),
            daily_draw: a.daily_draw(),
            hour_adjustable: a.is_hour_adjustable(),
            default_usage_hours: a.default_usage_hours(),
        })
        .collect();

    let dwelling_sizes = DwellingSize::ALL
        .iter()
        .map(|s| DwellingSizeInfo {
            size: s.as_str(),
            rooms: s.rooms(),
            base_energy: s.base_energy(),
        })
        .collect();

    Json(CatalogResponse {
        appliances,
        dwelling_sizes,
        housing_types: vec![HousingType::Flat.as_str(), HousingType::Tenement.as_str()],
        rate_per_kwh: RATE_PER_KWH,
    })
}
