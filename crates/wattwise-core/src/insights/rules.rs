//! Built-in recommendation rules

use crate::analytics::{Trend, TREND_WINDOW};

use super::engine::{AnalysisContext, Rule};
use super::types::{Recommendation, RecommendationKind, Severity};

/// Suggests efficient appliances when appliance energy exceeds a multiple of base energy
pub struct EfficientAppliancesRule {
    /// Appliance/base ratio above which the rule triggers (default 2.0)
    ratio: f64,
}

impl EfficientAppliancesRule {
    pub fn new() -> Self {
        Self { ratio: 2.0 }
    }
}

impl Default for EfficientAppliancesRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EfficientAppliancesRule {
    fn name(&self) -> &'static str {
        "Efficient Appliances"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Recommendation> {
        let summary = ctx.summary.as_ref()?;
        if summary.average_appliance <= summary.average_base * self.ratio {
            return None;
        }
        Some(
            Recommendation::new(
                RecommendationKind::EfficientAppliances,
                Severity::Attention,
                "Consider upgrading to energy-efficient appliances",
            )
            .with_data(serde_json::json!({
                "average_base": summary.average_base,
                "average_appliance": summary.average_appliance,
            })),
        )
    }
}

/// Flags high average consumption and points at peak-hour AC use
pub struct PeakHourAcRule {
    /// Average daily kWh above which the rule triggers (default 10)
    threshold: f64,
}

impl PeakHourAcRule {
    pub fn new() -> Self {
        Self { threshold: 10.0 }
    }
}

impl Default for PeakHourAcRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PeakHourAcRule {
    fn name(&self) -> &'static str {
        "Peak Hour AC"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Recommendation> {
        let summary = ctx.summary.as_ref()?;
        if summary.average_daily <= self.threshold {
            return None;
        }
        Some(
            Recommendation::new(
                RecommendationKind::PeakHourAc,
                Severity::Attention,
                "Your consumption is above average. Try to reduce AC usage during peak hours",
            )
            .with_data(serde_json::json!({ "average_daily": summary.average_daily })),
        )
    }
}

/// Warns on rising usage and praises falling usage once a week is recorded
pub struct TrendRule;

impl TrendRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrendRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for TrendRule {
    fn name(&self) -> &'static str {
        "Usage Trend"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Recommendation> {
        if ctx.records.len() < TREND_WINDOW {
            return None;
        }
        let trend = ctx.trend.as_ref()?;
        let rec = match trend.trend {
            Trend::Increasing => Recommendation::new(
                RecommendationKind::UsageIncreasing,
                Severity::Warning,
                "Your energy consumption has increased recently. Check for any new appliances or increased usage",
            ),
            Trend::Decreasing => Recommendation::new(
                RecommendationKind::UsageDecreasing,
                Severity::Praise,
                "Great job! Your energy consumption has decreased recently",
            ),
            Trend::Stable => return None,
        };
        Some(rec.with_data(serde_json::json!({
            "recent_average": trend.recent_average,
            "previous_average": trend.previous_average,
        })))
    }
}

/// Always-applicable advice
pub struct GenericTip {
    kind: RecommendationKind,
    message: &'static str,
}

impl GenericTip {
    pub fn new(kind: RecommendationKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    /// The standard tips, in display priority
    pub fn defaults() -> Vec<GenericTip> {
        vec![
            GenericTip::new(
                RecommendationKind::NaturalLight,
                "Use natural light during daytime to reduce electricity usage",
            ),
            GenericTip::new(
                RecommendationKind::ThermostatSetPoint,
                "Set your AC to 24-26°C for optimal efficiency",
            ),
            GenericTip::new(
                RecommendationKind::PhantomLoad,
                "Unplug devices when not in use to avoid phantom loads",
            ),
            GenericTip::new(
                RecommendationKind::LedBulbs,
                "Consider using LED bulbs if you haven't already",
            ),
        ]
    }
}

impl Rule for GenericTip {
    fn name(&self) -> &'static str {
        "Generic Tip"
    }

    fn evaluate(&self, _ctx: &AnalysisContext<'_>) -> Option<Recommendation> {
        Some(Recommendation::new(self.kind, Severity::Info, self.message))
    }
}
