//! Consumption calculator
//!
//! Pure functions mapping a dwelling size and an appliance selection to daily
//! energy figures. Unknown dwelling sizes and appliance names contribute zero
//! rather than failing, so a stale or hand-edited selection never blocks an
//! entry.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::{
    Appliance, DwellingSize, DEFAULT_USAGE_WINDOW_HOURS, MAX_USAGE_HOURS, RATE_PER_KWH,
};

/// Energy breakdown for one day's selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub dwelling_size: DwellingSize,
    pub base_energy: f64,
    /// Appliance energy after usage-hour adjustment
    pub appliance_energy: f64,
    pub total_energy: f64,
    pub estimated_cost: f64,
    /// Catalog names of the recognized selection; unknown names are dropped
    pub appliances: BTreeSet<String>,
}

/// Base energy for a dwelling size label (case-insensitive); unknown labels yield 0
pub fn base_energy(dwelling_size: &str) -> f64 {
    match dwelling_size.parse::<DwellingSize>() {
        Ok(size) => size.base_energy(),
        Err(_) => {
            tracing::debug!(dwelling_size, "Unknown dwelling size, base energy is zero");
            0.0
        }
    }
}

/// Resolve appliance names against the catalog, dropping unknown names
fn resolve_appliances<I, S>(names: I) -> BTreeSet<Appliance>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            match name.parse::<Appliance>() {
                Ok(appliance) => Some(appliance),
                Err(_) => {
                    tracing::debug!(appliance = name, "Unknown appliance contributes no energy");
                    None
                }
            }
        })
        .collect()
}

/// Sum of flat daily draws for the selected appliances
///
/// Each catalog appliance counts once no matter how often it is listed.
pub fn appliance_energy<I, S>(appliances: I) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve_appliances(appliances)
        .iter()
        .map(Appliance::daily_draw)
        .sum()
}

/// Clamp user-supplied hours to `[0, 24]`; NaN is rejected
pub fn clamp_usage_hours(hours: f64) -> Option<f64> {
    if hours.is_nan() {
        None
    } else {
        Some(hours.clamp(0.0, MAX_USAGE_HOURS))
    }
}

/// Replace the flat draw of hour-adjustable appliances with `draw * hours / 8`
///
/// Only selected appliances that are hour-adjustable (AC, TV, Microwave,
/// Water Heater) and have an entry in `hours` are adjusted. Everything else
/// keeps its flat draw.
pub fn adjust_for_usage_hours<I, S>(
    appliance_energy: f64,
    selected: I,
    hours: &BTreeMap<String, f64>,
) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected = resolve_appliances(selected);
    let mut adjusted = appliance_energy;
    let mut seen = BTreeSet::new();

    for (name, raw_hours) in hours {
        let Ok(appliance) = name.parse::<Appliance>() else {
            continue;
        };
        if !appliance.is_hour_adjustable()
            || !selected.contains(&appliance)
            || !seen.insert(appliance)
        {
            continue;
        }
        let Some(hours) = clamp_usage_hours(*raw_hours) else {
            continue;
        };
        let draw = appliance.daily_draw();
        adjusted += (draw * hours / DEFAULT_USAGE_WINDOW_HOURS) - draw;
    }

    adjusted
}

/// Daily cost at the fixed rate
pub fn estimated_cost(total_energy: f64) -> f64 {
    total_energy * RATE_PER_KWH
}

/// Full breakdown for a dwelling and a day's selection
pub fn estimate(
    dwelling_size: DwellingSize,
    appliances: &[String],
    hours: &BTreeMap<String, f64>,
) -> EnergyEstimate {
    let base = dwelling_size.base_energy();
    let flat = appliance_energy(appliances);
    let adjusted = adjust_for_usage_hours(flat, appliances, hours);
    let total = base + adjusted;

    EnergyEstimate {
        dwelling_size,
        base_energy: base,
        appliance_energy: adjusted,
        total_energy: total,
        estimated_cost: estimated_cost(total),
        appliances: resolve_appliances(appliances)
            .iter()
            .map(|a| a.as_str().to_string())
            .collect(),
    }
}
