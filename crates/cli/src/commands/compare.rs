//! Accrual frequency comparison command.

use std::fs;

use anyhow::{bail, Context, Result};
use bigdecimal::BigDecimal;
use ratelab_sim::{run, weeks, MathContext, Sample, Scenario, SECONDS_PER_YEAR};

use crate::cli::{CompareArgs, OutputFormat};
use crate::output::{
    format_comparison_table, period_run_name, RunSummary, RunsDocument, BASE_RUN_NAME,
};

pub fn run_compare(args: &CompareArgs, format: OutputFormat) -> Result<()> {
    let total_duration = weeks(args.weeks);
    for &period in &args.periods {
        if period > total_duration {
            bail!(
                "accrual period {period} is longer than the {}-week duration",
                args.weeks
            );
        }
    }

    let ctx = MathContext::new(args.precision);
    let mut scenario = Scenario::standard(ctx);
    scenario.params.initial_rate_at_target =
        ctx.div(&args.initial_rate, &BigDecimal::from(SECONDS_PER_YEAR));

    // Base curve: a single accrual over the whole duration, sampled once per
    // week by rerunning the scenario over every whole-week prefix
    let mut base_history = vec![Sample {
        time: 0,
        total_borrow: scenario.initial_borrow.clone(),
    }];
    let mut base_final = scenario.initial_borrow.clone();
    for week in 1..=args.weeks {
        let prefix = run(&scenario, weeks(week), weeks(week), ctx)?;
        base_final = prefix.market.total_borrow;
        base_history.push(Sample {
            time: weeks(week),
            total_borrow: base_final.clone(),
        });
    }
    let base_growth = &base_final - &scenario.initial_borrow;

    let mut document = RunsDocument::new(&args.initial_rate);
    document.insert_run(BASE_RUN_NAME, &base_history);

    let mut summaries = vec![RunSummary {
        name: BASE_RUN_NAME.to_string(),
        period: total_duration,
        steps: 1,
        final_borrow: base_final.clone(),
        growth_vs_base: Some(BigDecimal::from(100)),
    }];

    for &period in &args.periods {
        let name = period_run_name(period);
        let result = run(&scenario, total_duration, period, ctx)?;
        let growth = &result.market.total_borrow - &scenario.initial_borrow;
        let growth_vs_base = if base_growth == BigDecimal::from(0) {
            None
        } else {
            Some(ctx.div(&(growth * BigDecimal::from(100)), &base_growth))
        };

        document.insert_run(&name, &result.history);
        summaries.push(RunSummary {
            name,
            period,
            steps: (result.history.len() - 1) as u64,
            final_borrow: result.market.total_borrow,
            growth_vs_base,
        });
    }

    let json = serde_json::to_string(&document)?;
    fs::write(&args.out, &json)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_comparison_table(&summaries));
            println!("Wrote {}", args.out.display());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&document)?;
            println!("{}", json);
        }
    }

    Ok(())
}
