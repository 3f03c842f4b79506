//! Insight engine - evaluates recommendation rules in priority order

use crate::analytics::{self, EnergySummary, TrendComparison};
use crate::models::{DailyRecord, RATE_PER_KWH};

use super::rules::{EfficientAppliancesRule, GenericTip, PeakHourAcRule, TrendRule};
use super::types::{EfficiencyScore, InsightReport, Recommendation};

/// Default number of recommendations surfaced
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Precomputed figures shared by every rule
pub struct AnalysisContext<'a> {
    /// Date-sorted records
    pub records: &'a [DailyRecord],
    /// `None` when there are no records
    pub summary: Option<EnergySummary>,
    pub trend: Option<TrendComparison>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(records: &'a [DailyRecord]) -> Self {
        Self {
            records,
            summary: analytics::summarize(records),
            trend: analytics::trend_comparison(records),
        }
    }
}

/// A single recommendation rule
pub trait Rule: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce a recommendation when the rule triggers
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Recommendation>;
}

/// Ordered rule list; earlier rules win the limited slots
pub struct InsightEngine {
    rules: Vec<Box<dyn Rule>>,
    max_recommendations: usize,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self::empty(MAX_RECOMMENDATIONS);

        // Triggered rules first
        engine.register(Box::new(EfficientAppliancesRule::new()));
        engine.register(Box::new(PeakHourAcRule::new()));
        engine.register(Box::new(TrendRule::new()));

        // Generic tips fill the remaining slots
        for tip in GenericTip::defaults() {
            engine.register(Box::new(tip));
        }

        engine
    }

    /// Create an engine with no rules
    pub fn empty(max_recommendations: usize) -> Self {
        Self {
            rules: vec![],
            max_recommendations,
        }
    }

    /// Append a rule at the lowest priority
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Evaluate rules in order and keep the first `max_recommendations`
    ///
    /// Returns nothing when there is no recorded data.
    pub fn recommend(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation> {
        if ctx.summary.is_none() {
            return vec![];
        }

        let recommendations: Vec<Recommendation> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let rec = rule.evaluate(ctx);
                if let Some(ref rec) = rec {
                    tracing::debug!(rule = rule.name(), kind = rec.kind.as_str(), "Rule triggered");
                }
                rec
            })
            .take(self.max_recommendations)
            .collect();

        tracing::debug!(count = recommendations.len(), "Insight evaluation complete");
        recommendations
    }

    /// Score, recommendations and monthly projection, or `None` with no data
    pub fn report(&self, records: &[DailyRecord]) -> Option<InsightReport> {
        let ctx = AnalysisContext::new(records);
        let summary = ctx.summary.as_ref()?;
        let score = EfficiencyScore::from_average(summary.average_daily);
        let monthly_kwh = summary.average_daily * analytics::DAYS_PER_MONTH;

        Some(InsightReport {
            score,
            stars: score.stars(),
            average_daily: summary.average_daily,
            recommendations: self.recommend(&ctx),
            monthly_projection_kwh: monthly_kwh,
            monthly_projection_cost: monthly_kwh * RATE_PER_KWH,
        })
    }
}
