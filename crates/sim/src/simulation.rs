//! Stepped market simulation.
//!
//! This module drives a [`Market`](crate::market::Market) through time in
//! fixed accrual periods and records the borrow balance after every step.
//! Running the same scenario with different period lengths shows how much
//! the accrual frequency changes the compounding outcome.
//!
//! # How a run works
//!
//! A [`Scenario`] fixes the starting balances and model parameters. [`run`]
//! creates the market, then accrues interest `total_duration / period`
//! times (any remainder is dropped), appending a [`Sample`] to the history
//! after each step. The history always starts with a sample at time zero,
//! so a run over `n` steps yields `n + 1` samples.
//!
//! # Example
//!
//! ```rust
//! use ratelab_sim::math::{weeks, MathContext};
//! use ratelab_sim::simulation::{run, Scenario};
//!
//! let ctx = MathContext::default();
//! let scenario = Scenario::standard(ctx);
//!
//! // One week in a single step: the seed sample plus one accrual
//! let result = run(&scenario, weeks(1), weeks(1), ctx).unwrap();
//! assert_eq!(result.history.len(), 2);
//! assert!(result.market.total_borrow > scenario.initial_borrow);
//! ```

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use crate::error::SimError;
use crate::irm::IrmParams;
use crate::market::Market;
use crate::math::MathContext;

/// Starting conditions for a simulation
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Assets supplied to the market at creation
    pub initial_supply: BigDecimal,

    /// Assets borrowed from the market at creation
    pub initial_borrow: BigDecimal,

    /// Model parameters used for every accrual
    pub params: IrmParams,
}

impl Scenario {
    /// The canonical scenario: a market a hair above target utilization,
    /// paired with [`IrmParams::standard`].
    ///
    /// The balances put utilization at 0.90000005707762732..., so the
    /// controller adapts upward at a tiny but nonzero speed.
    pub fn standard(ctx: MathContext) -> Self {
        Self {
            initial_supply: BigDecimal::new(BigInt::from(1_000_000_057_077_627_380u64), 18),
            initial_borrow: BigDecimal::new(BigInt::from(900_000_057_077_627_380u64), 18),
            params: IrmParams::standard(ctx),
        }
    }
}

/// Borrow balance observed at a point in simulated time
#[derive(Debug, Clone)]
pub struct Sample {
    /// Seconds since the start of the run
    pub time: u64,

    /// Total borrowed assets at that time
    pub total_borrow: BigDecimal,
}

/// Outcome of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Market state after the last accrual
    pub market: Market,

    /// Borrow balance at time zero and after every accrual step
    pub history: Vec<Sample>,
}

/// Simulates a market for `total_duration` seconds, accruing interest every
/// `period` seconds.
///
/// The run takes `total_duration / period` whole steps; a trailing partial
/// period is not accrued. The returned history holds one sample per step
/// plus the seed sample at time zero.
///
/// # Errors
///
/// - [`SimError::ZeroPeriod`] if `period` is zero
/// - [`SimError::NonPositiveSupply`] if the scenario's supply is not positive
pub fn run(
    scenario: &Scenario,
    total_duration: u64,
    period: u64,
    ctx: MathContext,
) -> Result<SimulationRun, SimError> {
    if period == 0 {
        return Err(SimError::ZeroPeriod);
    }
    let steps = total_duration / period;

    let mut market = Market::new(
        scenario.initial_supply.clone(),
        scenario.initial_borrow.clone(),
        scenario.params.initial_rate_at_target.clone(),
        ctx,
    )?;

    let mut history = Vec::with_capacity(steps as usize + 1);
    history.push(Sample {
        time: 0,
        total_borrow: market.total_borrow.clone(),
    });

    for _ in 0..steps {
        market = market.accrue_interest(period, &scenario.params, ctx)?;
        history.push(Sample {
            time: market.elapsed_total,
            total_borrow: market.total_borrow.clone(),
        });
    }

    Ok(SimulationRun { market, history })
}
