//! Report command implementation
//!
//! Reads a CSV export from the dashboard and prints the same analytics and
//! recommendations the insights tab shows. The file is never modified.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

use wattwise_core::analytics;
use wattwise_core::export;
use wattwise_core::{DailyRecord, InsightEngine};

use super::{kwh, rupees};

/// Load an exported history, sorted by date
pub fn load_history(path: &Path) -> Result<Vec<DailyRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    export::read_csv(file).with_context(|| format!("Failed to read history from {}", path.display()))
}

pub fn cmd_report(input: &Path, json: bool) -> Result<()> {
    let records = load_history(input)?;
    tracing::debug!(count = records.len(), "Loaded history");

    let summary = analytics::summarize(&records);
    let weekly = analytics::weekly_average(&records);
    let trend = analytics::trend_comparison(&records);
    let insights = InsightEngine::new().report(&records);

    if json {
        let report = serde_json::json!({
            "summary": summary,
            "weekly": weekly,
            "trend": trend,
            "insights": insights,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some(summary) = summary else {
        println!("📭 No energy data recorded yet.");
        return Ok(());
    };

    println!("📊 Energy report ({} days)", summary.days_tracked);
    println!();
    println!("   Average daily:    {:>12}", kwh(summary.average_daily));
    println!("   Highest day:      {:>12}", kwh(summary.highest_daily));
    println!("   Monthly estimate: {:>12}", kwh(summary.monthly_estimate));
    println!("   Monthly cost:     {:>12}", rupees(summary.monthly_cost));
    println!("   Avg base:         {:>12}", kwh(summary.average_base));
    println!("   Avg appliances:   {:>12}", kwh(summary.average_appliance));

    if !weekly.is_empty() {
        println!();
        println!("📅 Weekly averages");
        for week in &weekly {
            println!(
                "   {}-W{:02}  {:>12}  ({} days)",
                week.iso_year,
                week.week,
                kwh(week.average),
                week.days
            );
        }
    }

    if let Some(trend) = trend {
        println!();
        println!(
            "📈 Trend: {} (recent {} vs earlier {})",
            trend.trend,
            kwh(trend.recent_average),
            kwh(trend.previous_average)
        );
    }

    if let Some(report) = insights {
        println!();
        println!(
            "🏅 Efficiency: {} {}",
            report.score,
            "★".repeat(report.stars as usize)
        );
        println!();
        println!("💡 Recommendations");
        for rec in &report.recommendations {
            println!("   • {}", rec.message);
        }
    }

    Ok(())
}
