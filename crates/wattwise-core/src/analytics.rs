//! Analytics over recorded days
//!
//! Every function takes the date-sorted record slice from
//! [`crate::session::Session::records`] and is read-only. Aggregates return
//! `None` for an empty slice ("no data") instead of dividing by zero.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{DailyRecord, RATE_PER_KWH};

/// Days used when projecting a month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Records compared at each end of the history by [`trend_comparison`]
pub const TREND_WINDOW: usize = 7;

/// Relative change that counts as increasing/decreasing
pub const TREND_THRESHOLD: f64 = 0.10;

/// Headline numbers for the analytics tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySummary {
    pub days_tracked: usize,
    pub average_daily: f64,
    pub highest_daily: f64,
    pub monthly_estimate: f64,
    pub monthly_cost: f64,
    pub average_base: f64,
    pub average_appliance: f64,
}

/// One point of the daily trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub total_energy: f64,
}

/// Average split between base and appliance energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub categories: Vec<CategoryAverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub category: String,
    pub average: f64,
}

/// Average total energy over one ISO calendar week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAverage {
    pub iso_year: i32,
    pub week: u32,
    pub average: f64,
    pub days: usize,
}

/// Direction of recent consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recent vs earliest window comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendComparison {
    pub recent_average: f64,
    pub previous_average: f64,
    pub trend: Trend,
}

fn mean_of<F>(records: &[DailyRecord], field: F) -> Option<f64>
where
    F: Fn(&DailyRecord) -> f64,
{
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(field).sum();
    Some(sum / records.len() as f64)
}

pub fn count(records: &[DailyRecord]) -> usize {
    records.len()
}

pub fn mean_total(records: &[DailyRecord]) -> Option<f64> {
    mean_of(records, |r| r.total_energy)
}

pub fn mean_base(records: &[DailyRecord]) -> Option<f64> {
    mean_of(records, |r| r.base_energy)
}

pub fn mean_appliance(records: &[DailyRecord]) -> Option<f64> {
    mean_of(records, |r| r.appliance_energy)
}

pub fn max_total(records: &[DailyRecord]) -> Option<f64> {
    records.iter().map(|r| r.total_energy).reduce(f64::max)
}

/// Average daily total projected over a 30-day month
pub fn monthly_estimate(records: &[DailyRecord]) -> Option<f64> {
    mean_total(records).map(|mean| mean * DAYS_PER_MONTH)
}

pub fn summarize(records: &[DailyRecord]) -> Option<EnergySummary> {
    let average_daily = mean_total(records)?;
    let monthly = average_daily * DAYS_PER_MONTH;

    Some(EnergySummary {
        days_tracked: records.len(),
        average_daily,
        highest_daily: max_total(records)?,
        monthly_estimate: monthly,
        monthly_cost: monthly * RATE_PER_KWH,
        average_base: mean_base(records)?,
        average_appliance: mean_appliance(records)?,
    })
}

pub fn daily_series(records: &[DailyRecord]) -> Vec<DailyPoint> {
    records
        .iter()
        .map(|r| DailyPoint {
            date: r.date,
            total_energy: r.total_energy,
        })
        .collect()
}

pub fn breakdown(records: &[DailyRecord]) -> Option<EnergyBreakdown> {
    Some(EnergyBreakdown {
        categories: vec![
            CategoryAverage {
                category: "Base Energy".to_string(),
                average: mean_base(records)?,
            },
            CategoryAverage {
                category: "Appliance Energy".to_string(),
                average: mean_appliance(records)?,
            },
        ],
    })
}

/// Average total energy per ISO week, ascending
///
/// The chart is only meaningful with at least a week of data; fewer records
/// still produce whatever groups exist.
pub fn weekly_average(records: &[DailyRecord]) -> Vec<WeeklyAverage> {
    let mut weeks: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();

    for record in records {
        let iso = record.date.iso_week();
        let entry = weeks.entry((iso.year(), iso.week())).or_insert((0.0, 0));
        entry.0 += record.total_energy;
        entry.1 += 1;
    }

    weeks
        .into_iter()
        .map(|((iso_year, week), (sum, days))| WeeklyAverage {
            iso_year,
            week,
            average: sum / days as f64,
            days,
        })
        .collect()
}

/// Compare the last 7 records with the first 7
///
/// With fewer than 14 records both windows are the recent one, so the
/// result is always `Stable`.
pub fn trend_comparison(records: &[DailyRecord]) -> Option<TrendComparison> {
    let window = TREND_WINDOW.min(records.len());
    let recent_average = mean_total(&records[records.len() - window..])?;
    let previous_average = if records.len() >= TREND_WINDOW * 2 {
        mean_total(&records[..TREND_WINDOW])?
    } else {
        recent_average
    };

    let trend = if recent_average > previous_average * (1.0 + TREND_THRESHOLD) {
        Trend::Increasing
    } else if recent_average < previous_average * (1.0 - TREND_THRESHOLD) {
        Trend::Decreasing
    } else {
        Trend::Stable
    };

    Some(TrendComparison {
        recent_average,
        previous_average,
        trend,
    })
}
