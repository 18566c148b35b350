//! Table and detail formatting for simulation results.

use bigdecimal::{BigDecimal, RoundingMode};
use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Outcome of one simulated run, ready for display
pub struct RunSummary {
    /// Display name of the run
    pub name: String,

    /// Accrual period in seconds
    pub period: u64,

    /// Number of accrual steps taken
    pub steps: u64,

    /// Borrow balance at the end of the run
    pub final_borrow: BigDecimal,

    /// Borrow growth as a percentage of the base run's growth, if the base
    /// run grew at all
    pub growth_vs_base: Option<BigDecimal>,
}

/// Summary of a single run for detailed output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Display name of the run
    pub name: String,

    /// Duration of the run in seconds
    pub duration: u64,

    /// Accrual period in seconds
    pub period: u64,

    /// Number of accrual steps taken
    pub steps: u64,

    /// Decimal digits of working precision
    pub precision: u64,

    /// Initial rate at target as a percentage
    pub initial_rate: String,

    /// Borrow balance at the end of the run, at full precision
    pub final_borrow: String,

    /// Sampled borrow history
    pub history: Vec<RunPoint>,
}

/// One reported point of a run's borrow history
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPoint {
    /// Seconds since the start of the run
    pub time: u64,

    /// Borrow balance at that time
    #[serde(serialize_with = "serialize_decimal")]
    pub total_borrow: BigDecimal,
}

fn serialize_decimal<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Run")]
    run: String,
    #[tabled(rename = "Period (s)")]
    period: String,
    #[tabled(rename = "Steps")]
    steps: String,
    #[tabled(rename = "Final Borrow")]
    final_borrow: String,
    #[tabled(rename = "Growth vs base")]
    growth: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Time (s)")]
    time: String,
    #[tabled(rename = "Weeks")]
    weeks: String,
    #[tabled(rename = "Total Borrow")]
    total_borrow: String,
}

fn format_borrow(value: &BigDecimal) -> String {
    value.with_scale_round(12, RoundingMode::HalfUp).to_string()
}

fn format_ratio(value: &BigDecimal) -> String {
    format!("{}%", value.with_scale_round(4, RoundingMode::HalfUp))
}

fn format_weeks(time: u64) -> String {
    format!("{:.2}", time as f64 / 604_800.0)
}

pub fn format_comparison_table(summaries: &[RunSummary]) -> String {
    let rows: Vec<ComparisonRow> = summaries
        .iter()
        .map(|summary| ComparisonRow {
            run: summary.name.clone(),
            period: summary.period.to_string(),
            steps: summary.steps.to_string(),
            final_borrow: format_borrow(&summary.final_borrow),
            growth: summary
                .growth_vs_base
                .as_ref()
                .map(format_ratio)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}

pub fn format_run_detail(report: &RunReport) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", report.name.bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    // Parameters
    output.push_str(&format!("{}\n", "Parameters".cyan().bold()));
    output.push_str(&format!(
        "  Duration:     {} seconds ({} weeks)\n",
        report.duration,
        format_weeks(report.duration)
    ));
    output.push_str(&format!("  Period:       {} seconds\n", report.period));
    output.push_str(&format!("  Steps:        {}\n", report.steps));
    output.push_str(&format!("  Precision:    {} digits\n", report.precision));
    output.push_str(&format!("  Initial rate: {}\n\n", report.initial_rate));

    // Sampled history
    output.push_str(&format!("{}\n", "Borrow History".cyan().bold()));
    let rows: Vec<HistoryRow> = report
        .history
        .iter()
        .map(|point| HistoryRow {
            time: point.time.to_string(),
            weeks: format_weeks(point.time),
            total_borrow: format_borrow(&point.total_borrow),
        })
        .collect();
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    output.push_str(&format!("{}\n\n", table));

    // Final balance at full precision
    output.push_str(&format!("{}\n", "Final Borrow".cyan().bold()));
    output.push_str(&format!("  {}\n", report.final_borrow));

    output
}
