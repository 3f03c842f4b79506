//! Core types for the insight generator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of recommendation the rules can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Appliance draw dwarfs the dwelling's base load
    EfficientAppliances,
    /// High average consumption, likely AC-driven
    PeakHourAc,
    /// Recent week noticeably above the first week
    UsageIncreasing,
    /// Recent week noticeably below the first week
    UsageDecreasing,
    NaturalLight,
    ThermostatSetPoint,
    PhantomLoad,
    LedBulbs,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::EfficientAppliances => "efficient_appliances",
            RecommendationKind::PeakHourAc => "peak_hour_ac",
            RecommendationKind::UsageIncreasing => "usage_increasing",
            RecommendationKind::UsageDecreasing => "usage_decreasing",
            RecommendationKind::NaturalLight => "natural_light",
            RecommendationKind::ThermostatSetPoint => "thermostat_set_point",
            RecommendationKind::PhantomLoad => "phantom_load",
            RecommendationKind::LedBulbs => "led_bulbs",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tone of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// General advice, always applicable
    Info,
    /// Positive reinforcement
    Praise,
    /// Worth looking at
    Attention,
    /// Consumption is moving the wrong way
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Praise => "praise",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recommendation surfaced to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub severity: Severity,
    pub message: String,
    /// Rule-specific figures behind the recommendation
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub data: serde_json::Value,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            data: serde_json::Value::Null,
        }
    }

    /// Add structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// Label for average daily consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyScore {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl EfficiencyScore {
    /// Classify a mean daily total: <5, [5,8), [8,12), >=12
    pub fn from_average(average_daily: f64) -> Self {
        if average_daily < 5.0 {
            EfficiencyScore::Excellent
        } else if average_daily < 8.0 {
            EfficiencyScore::Good
        } else if average_daily < 12.0 {
            EfficiencyScore::Average
        } else {
            EfficiencyScore::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyScore::Excellent => "Excellent",
            EfficiencyScore::Good => "Good",
            EfficiencyScore::Average => "Average",
            EfficiencyScore::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn stars(&self) -> u8 {
        match self {
            EfficiencyScore::Excellent => 5,
            EfficiencyScore::Good => 4,
            EfficiencyScore::Average => 3,
            EfficiencyScore::NeedsImprovement => 2,
        }
    }
}

impl fmt::Display for EfficiencyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything the insights tab shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub score: EfficiencyScore,
    pub stars: u8,
    pub average_daily: f64,
    pub recommendations: Vec<Recommendation>,
    pub monthly_projection_kwh: f64,
    pub monthly_projection_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde_matches_as_str() {
        assert_eq!(RecommendationKind::PhantomLoad.as_str(), "phantom_load");
        let json = serde_json::to_string(&RecommendationKind::UsageDecreasing).unwrap();
        assert_eq!(json, format!("\"{}\"", RecommendationKind::UsageDecreasing));
    }

    #[test]
    fn test_efficiency_boundaries() {
        assert_eq!(EfficiencyScore::from_average(4.999), EfficiencyScore::Excellent);
        assert_eq!(EfficiencyScore::from_average(5.0), EfficiencyScore::Good);
        assert_eq!(EfficiencyScore::from_average(7.999), EfficiencyScore::Good);
        assert_eq!(EfficiencyScore::from_average(8.0), EfficiencyScore::Average);
        assert_eq!(EfficiencyScore::from_average(11.999), EfficiencyScore::Average);
        assert_eq!(
            EfficiencyScore::from_average(12.0),
            EfficiencyScore::NeedsImprovement
        );
    }

    #[test]
    fn test_efficiency_labels() {
        assert_eq!(EfficiencyScore::NeedsImprovement.label(), "Needs Improvement");
        assert_eq!(EfficiencyScore::Excellent.stars(), 5);
        assert_eq!(EfficiencyScore::NeedsImprovement.stars(), 2);
    }

    #[test]
    fn test_recommendation_builder() {
        let rec = Recommendation::new(
            RecommendationKind::PeakHourAc,
            Severity::Attention,
            "Cut AC at peak",
        )
        .with_data(serde_json::json!({"average_daily": 11.0}));

        assert_eq!(rec.data["average_daily"], 11.0);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["kind"], "peak_hour_ac");
        assert_eq!(json["severity"], "attention");
    }
}
