//! WattWise Core Library
//!
//! Shared functionality for the WattWise household energy tracker:
//! - Appliance and dwelling catalogs
//! - Consumption calculator (base + appliance energy, usage-hour adjustment, cost)
//! - Session state: profile and date-keyed daily record store
//! - Analytics (averages, weekly grouping, trend comparison)
//! - Rule-based insight generator and efficiency score
//! - CSV/JSON history export

pub mod analytics;
pub mod calculator;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod session;

pub use analytics::{EnergySummary, Trend, TrendComparison, WeeklyAverage};
pub use calculator::EnergyEstimate;
pub use error::{Error, Result};
pub use export::ExportFormat;
pub use insights::{EfficiencyScore, InsightEngine, InsightReport, Recommendation};
pub use models::{Appliance, DailyEntry, DailyRecord, DwellingSize, HousingType, NewProfile, Profile};
pub use session::{RecordStore, Session};
