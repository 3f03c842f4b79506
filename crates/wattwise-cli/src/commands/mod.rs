//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `catalog` - Appliance and dwelling catalog listing
//! - `estimate` - One-off consumption estimate
//! - `report` - Offline analytics and insights over an exported history
//! - `serve` - Web server command

pub mod catalog;
pub mod estimate;
pub mod report;
pub mod serve;

// Re-export command functions for main.rs
pub use catalog::*;
pub use estimate::*;
pub use report::*;
pub use serve::*;

/// Format a kWh figure for terminal output
pub fn kwh(value: f64) -> String {
    format!("{:.2} kWh", value)
}

/// Format a rupee amount for terminal output
pub fn rupees(value: f64) -> String {
    format!("₹{:.2}", value)
}
