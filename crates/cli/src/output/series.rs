//! Serialized run series for downstream analysis.
//!
//! The compare command writes every run as a time series of borrow
//! balances so plotting tools can consume the results without rerunning
//! the simulation.

use std::collections::BTreeMap;

use bigdecimal::{BigDecimal, RoundingMode};
use ratelab_sim::Sample;
use serde::Serialize;

/// Display name of the run that accrues once over the whole duration
pub const BASE_RUN_NAME: &str = "Full Duration";

/// Every serialized run of a comparison, keyed by display name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunsDocument {
    /// Initial rate at target as a percentage, e.g. "200%"
    pub initial_rate: String,

    /// Borrow series keyed by run name
    pub runs: BTreeMap<String, Vec<SeriesPoint>>,

    /// Name of the run the others are compared against
    pub base_run_name: String,
}

/// One point of a serialized borrow series
#[derive(Debug, Serialize)]
pub struct SeriesPoint {
    /// Seconds since the start of the run
    pub time: u64,

    /// Borrow balance scaled by 1e7, fixed to five decimal places
    pub v: String,
}

impl RunsDocument {
    pub fn new(initial_rate: &BigDecimal) -> Self {
        Self {
            initial_rate: percent(initial_rate),
            runs: BTreeMap::new(),
            base_run_name: BASE_RUN_NAME.to_string(),
        }
    }

    /// Adds a run's borrow history under the given display name.
    pub fn insert_run(&mut self, name: &str, history: &[Sample]) {
        let series = history
            .iter()
            .map(|sample| SeriesPoint {
                time: sample.time,
                v: scaled_fixed(&sample.total_borrow),
            })
            .collect();
        self.runs.insert(name.to_string(), series);
    }
}

/// Formats a per-year rate as a percentage, e.g. "2" becomes "200%".
pub fn percent(rate: &BigDecimal) -> String {
    format!("{}%", (rate * BigDecimal::from(100)).normalized())
}

/// Display name for a run accruing every `period` seconds.
pub fn period_run_name(period: u64) -> String {
    if period % 1_000_000 == 0 {
        format!("Every {}M seconds", period / 1_000_000)
    } else if period % 1_000 == 0 {
        format!("Every {}k seconds", period / 1_000)
    } else {
        format!("Every {period} seconds")
    }
}

/// Scales a borrow balance by 1e7 and fixes it to five decimal places.
fn scaled_fixed(borrow: &BigDecimal) -> String {
    let scaled = borrow * BigDecimal::from(10_000_000u64);
    scaled.with_scale_round(5, RoundingMode::HalfUp).to_string()
}
