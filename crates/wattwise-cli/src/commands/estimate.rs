//! Estimate command implementation

use std::collections::BTreeMap;

use anyhow::Result;

use wattwise_core::calculator::{self, EnergyEstimate};
use wattwise_core::models::{Appliance, DwellingSize};

use super::{kwh, rupees};

/// Compute an estimate from CLI arguments
///
/// Repeated `--hours` for the same appliance keep the last value.
pub fn estimate_for(
    size: DwellingSize,
    appliances: &[String],
    hours: &[(String, f64)],
) -> EnergyEstimate {
    let hours: BTreeMap<String, f64> = hours.iter().cloned().collect();
    calculator::estimate(size, appliances, &hours)
}

/// Names that do not resolve to a catalog appliance
pub fn unknown_appliances<'a>(names: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    names
        .into_iter()
        .map(String::as_str)
        .filter(|name| name.parse::<Appliance>().is_err())
        .collect()
}

pub fn cmd_estimate(
    size: DwellingSize,
    appliances: &[String],
    hours: &[(String, f64)],
    json: bool,
) -> Result<()> {
    let estimate = estimate_for(size, appliances, hours);

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    for name in unknown_appliances(appliances) {
        println!("⚠️  Unknown appliance ignored: {}", name);
    }
    for (name, _) in hours {
        if let Ok(appliance) = name.parse::<Appliance>() {
            if !appliance.is_hour_adjustable() {
                println!("ℹ️  {} always uses its flat daily draw", appliance);
            }
        }
    }

    println!("⚡ Energy estimate for a {}", estimate.dwelling_size);
    println!();
    println!("   Base energy:      {:>12}", kwh(estimate.base_energy));
    println!("   Appliance energy: {:>12}", kwh(estimate.appliance_energy));
    println!("   Total:            {:>12}", kwh(estimate.total_energy));
    println!("   Estimated cost:   {:>12}", rupees(estimate.estimated_cost));

    if !estimate.appliances.is_empty() {
        println!();
        println!(
            "   Appliances: {}",
            estimate
                .appliances
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
