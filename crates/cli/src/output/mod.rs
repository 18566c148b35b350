//! Output formatting for CLI results.

pub mod report;
pub mod series;

pub use report::{format_comparison_table, format_run_detail, RunPoint, RunReport, RunSummary};
pub use series::{percent, period_run_name, RunsDocument, BASE_RUN_NAME};
