//! Single run command.

use anyhow::{bail, Result};
use bigdecimal::BigDecimal;
use ratelab_sim::{run, weeks, MathContext, Sample, Scenario, SECONDS_PER_YEAR};

use crate::cli::{OutputFormat, RunArgs};
use crate::output::{format_run_detail, percent, period_run_name, RunPoint, RunReport};

pub fn run_simulation(args: &RunArgs, format: OutputFormat) -> Result<()> {
    let total_duration = weeks(args.weeks);
    if args.period > total_duration {
        bail!(
            "accrual period {} is longer than the {}-week duration",
            args.period,
            args.weeks
        );
    }

    let ctx = MathContext::new(args.precision);
    let mut scenario = Scenario::standard(ctx);
    scenario.params.initial_rate_at_target =
        ctx.div(&args.initial_rate, &BigDecimal::from(SECONDS_PER_YEAR));

    let result = run(&scenario, total_duration, args.period, ctx)?;

    let report = RunReport {
        name: period_run_name(args.period),
        duration: total_duration,
        period: args.period,
        steps: (result.history.len() - 1) as u64,
        precision: ctx.digits(),
        initial_rate: percent(&args.initial_rate),
        final_borrow: result.market.total_borrow.to_string(),
        history: sampled_points(&result.history, args.samples),
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_run_detail(&report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Picks up to `samples` evenly spaced points, always keeping the first and
/// last ones.
fn sampled_points(history: &[Sample], samples: usize) -> Vec<RunPoint> {
    let samples = samples.max(2);
    let indices: Vec<usize> = if history.len() <= samples {
        (0..history.len()).collect()
    } else {
        let mut picked: Vec<usize> = (0..samples)
            .map(|i| i * (history.len() - 1) / (samples - 1))
            .collect();
        picked.dedup();
        picked
    };

    indices
        .into_iter()
        .map(|i| RunPoint {
            time: history[i].time,
            total_borrow: history[i].total_borrow.clone(),
        })
        .collect()
}
