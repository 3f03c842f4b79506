//! Insight generator - rule-based energy recommendations
//!
//! Rules are evaluated in a fixed priority order against an
//! [`AnalysisContext`] built from the recorded days. Triggered rules
//! (efficient appliances, peak-hour AC, usage trend) come first and the
//! generic tips fill whatever slots remain, up to five.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wattwise_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let report = engine.report(&session.records());
//! ```

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{AnalysisContext, InsightEngine, Rule, MAX_RECOMMENDATIONS};
pub use rules::{EfficientAppliancesRule, GenericTip, PeakHourAcRule, TrendRule};
pub use types::{EfficiencyScore, InsightReport, Recommendation, RecommendationKind, Severity};
