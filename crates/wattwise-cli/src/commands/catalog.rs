//! Catalog command implementation

use anyhow::Result;

use wattwise_core::models::{Appliance, DwellingSize, RATE_PER_KWH};

use super::kwh;

pub fn cmd_catalog() -> Result<()> {
    println!("🏠 Base energy by dwelling size");
    println!();
    for size in DwellingSize::ALL {
        println!(
            "   {:<6} {} rooms  {:>10}",
            size.as_str(),
            size.rooms(),
            kwh(size.base_energy())
        );
    }

    println!();
    println!("🔌 Appliances (daily draw)");
    println!();
    for appliance in Appliance::ALL {
        let hours = match appliance.default_usage_hours() {
            Some(h) => format!("adjustable, default {}h", h),
            None => "flat".to_string(),
        };
        println!(
            "   {:<16} {:>10}  {}",
            appliance.as_str(),
            kwh(appliance.daily_draw()),
            hours
        );
    }

    println!();
    println!("💡 Rate: ₹{:.2} per kWh", RATE_PER_KWH);
    Ok(())
}
