//! Adaptive curve interest rate model.
//!
//! This module implements the feedback controller that steers a market's
//! borrow rate toward a target utilization.
//!
//! # How the model works
//!
//! The model has two components:
//!
//! ## 1. The curve function
//!
//! The instantaneous borrow rate is the rate at target utilization shifted
//! along an asymmetric curve:
//!
//! ```text
//! If utilization > target:
//!     rate = rate_at_target * (1 + (Kd - 1) * err)       // steep above target
//! If utilization < target:
//!     rate = rate_at_target * (1 + (Kd - 1) / Kd * err)  // gradual below target
//!
//! where err is the utilization error normalized to [-1, 1]
//! ```
//!
//! With steepness `Kd` the multiplier spans `[1/Kd, Kd]`: rates climb much
//! faster above target than they fall below it.
//!
//! ## 2. Rate adaptation
//!
//! `rate_at_target` itself drifts exponentially over time, at a speed
//! proportional to the error of the market's *initial* utilization:
//!
//! ```text
//! end_rate_at_target = rate_at_target * exp(speed * elapsed)
//! speed              = adjustment_speed * initial_err
//! ```
//!
//! Pinning the speed to the initial error makes the adaptation exponent a
//! function of total elapsed time only, so many short accruals and one long
//! accrual land on the same end rate. The average rate over the interval has
//! a closed form (see [`get_borrow_rate`]), which is what makes the
//! simulation exact rather than a numerical integration.
//!
//! # Parameters
//!
//! [`IrmParams::standard`] carries the canonical set:
//!
//! | Parameter | Value | Description |
//! |-----------|-------|-------------|
//! | `target_utilization` | 0.9 | Utilization the controller steers toward |
//! | `curve_steepness` | 4 | Rate multiplier at 100% utilization |
//! | `adjustment_speed` | 50/year | Adaptation speed at full error |
//! | `initial_rate_at_target` | 200%/year | Rate at target for a fresh market |
//!
//! # Example
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use ratelab_sim::irm::{get_borrow_rate, IrmParams};
//! use ratelab_sim::math::MathContext;
//!
//! let ctx = MathContext::default();
//! let params = IrmParams::standard(ctx);
//! let target: BigDecimal = "0.9".parse().unwrap();
//!
//! // A market sitting exactly at target utilization keeps its rate
//! let result = get_borrow_rate(
//!     &BigDecimal::from(9),
//!     &BigDecimal::from(10),
//!     &params.initial_rate_at_target,
//!     &target,
//!     86_400,
//!     &params,
//!     ctx,
//! )
//! .unwrap();
//! assert_eq!(result.avg_borrow_rate, params.initial_rate_at_target);
//! ```

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, One, Zero};

use crate::error::SimError;
use crate::math::{MathContext, SECONDS_PER_YEAR};

/// Parameters of the adaptive curve model.
///
/// The fields are public so a driver can override individual knobs; the
/// engine expects `target_utilization` strictly between 0 and 1,
/// `curve_steepness` above 1 and both rates expressed per second.
#[derive(Debug, Clone)]
pub struct IrmParams {
    /// Utilization the controller steers toward (fraction of supply)
    pub target_utilization: BigDecimal,

    /// Curve steepness `Kd`: the borrow rate is `Kd` times the rate at
    /// target when the market is fully utilized
    pub curve_steepness: BigDecimal,

    /// Adaptation speed `Kp` at full utilization error, per second
    pub adjustment_speed: BigDecimal,

    /// Rate at target utilization assigned to a market on its first
    /// interaction, per second
    pub initial_rate_at_target: BigDecimal,
}

impl IrmParams {
    /// The canonical parameter set: target 90%, steepness 4, adjustment
    /// speed 50/year, initial rate 200%/year.
    pub fn standard(ctx: MathContext) -> Self {
        let year = BigDecimal::from(SECONDS_PER_YEAR);
        Self {
            target_utilization: BigDecimal::new(BigInt::from(9), 1),
            curve_steepness: BigDecimal::from(4u32),
            adjustment_speed: ctx.div(&BigDecimal::from(50u32), &year),
            initial_rate_at_target: ctx.div(&BigDecimal::from(2u32), &year),
        }
    }
}

/// Result of a borrow rate calculation
#[derive(Debug, Clone)]
pub struct BorrowRateResult {
    /// Average borrow rate over the period (per second), the rate to accrue
    /// interest at
    pub avg_borrow_rate: BigDecimal,
    /// Instantaneous borrow rate at the end of the period (per second)
    pub end_borrow_rate: BigDecimal,
    /// New rate at target utilization after the period
    pub end_rate_at_target: BigDecimal,
}

/// Utilization error normalized to `[-1, 1]`.
///
/// The distance from target is divided by the headroom on that side, so
/// full utilization maps to `1` and an empty market to `-1`:
///
/// ```text
/// err = (utilization - target) / (1 - target)   above target
/// err = (utilization - target) / target         at or below target
/// ```
pub fn normalized_error(
    utilization: &BigDecimal,
    params: &IrmParams,
    ctx: MathContext,
) -> BigDecimal {
    let delta = utilization - &params.target_utilization;
    let norm_factor = if utilization > &params.target_utilization {
        BigDecimal::one() - &params.target_utilization
    } else {
        params.target_utilization.clone()
    };
    ctx.div(&delta, &norm_factor)
}

/// The curve multiplier for a normalized error, in `[1/Kd, Kd]`.
///
/// Zero error returns exactly 1; the negative side is flattened by `Kd` so
/// rates fall slower below target than they rise above it.
pub fn curve(err: &BigDecimal, params: &IrmParams, ctx: MathContext) -> BigDecimal {
    let coeff = &params.curve_steepness - BigDecimal::one();
    if err < &BigDecimal::zero() {
        BigDecimal::one() + ctx.div(&ctx.mul(&coeff, err), &params.curve_steepness)
    } else {
        BigDecimal::one() + ctx.mul(&coeff, err)
    }
}

/// Calculates the borrow rate for a market over an accrual interval.
///
/// This is the core model function: it computes the average borrow rate to
/// accrue interest at over the interval, the instantaneous rate at the end,
/// and the adapted rate at target.
///
/// # Rate calculation
///
/// 1. Compute the normalized utilization error from `total_borrow` and
///    `total_supply`.
/// 2. Adapt `rate_at_target` exponentially, with the exponent driven by the
///    error of `initial_utilization` (fixed for the market's life).
/// 3. Apply the curve multiplier to the start and end rates, and average
///    them in closed form:
///
/// ```text
/// end_rate_at_target = rate_at_target * exp(linear_adaptation)
/// avg_borrow_rate    = (end_borrow_rate - start_borrow_rate) / linear_adaptation
/// ```
///
/// the exact time average of an exponentially adapting rate.
///
/// # Arguments
///
/// * `total_borrow` - Assets currently borrowed from the market
/// * `total_supply` - Assets currently supplied to the market (must be positive)
/// * `rate_at_target` - Current rate at target utilization (per second).
///   Pass zero for a first interaction, which returns
///   `initial_rate_at_target` without any time integration.
/// * `initial_utilization` - Utilization captured when the market was created
/// * `elapsed` - Length of the accrual interval in seconds
/// * `params` - Model parameters
/// * `ctx` - Arithmetic precision for the computation
///
/// # Errors
///
/// - [`SimError::NonPositiveSupply`] if `total_supply` is zero or negative
///
/// # Example
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use ratelab_sim::irm::{get_borrow_rate, IrmParams};
/// use ratelab_sim::math::{weeks, MathContext};
///
/// let ctx = MathContext::default();
/// let params = IrmParams::standard(ctx);
/// let initial_utilization: BigDecimal = "0.95".parse().unwrap();
///
/// // 95% utilization, one week of adaptation
/// let result = get_borrow_rate(
///     &BigDecimal::from(95),
///     &BigDecimal::from(100),
///     &params.initial_rate_at_target,
///     &initial_utilization,
///     weeks(1),
///     &params,
///     ctx,
/// )
/// .unwrap();
///
/// // Above target, the rate carries the curve multiplier and the rate at
/// // target has adapted upward
/// assert!(result.end_borrow_rate > result.end_rate_at_target);
/// assert!(result.end_rate_at_target > params.initial_rate_at_target);
/// ```
pub fn get_borrow_rate(
    total_borrow: &BigDecimal,
    total_supply: &BigDecimal,
    rate_at_target: &BigDecimal,
    initial_utilization: &BigDecimal,
    elapsed: u64,
    params: &IrmParams,
    ctx: MathContext,
) -> Result<BorrowRateResult, SimError> {
    if total_supply <= &BigDecimal::zero() {
        return Err(SimError::NonPositiveSupply {
            supply: total_supply.clone(),
        });
    }

    let utilization = ctx.div(total_borrow, total_supply);
    let err = normalized_error(&utilization, params, ctx);
    let curve_mult = curve(&err, params, ctx);

    // First interaction: start from the configured rate, whatever the
    // elapsed time says
    if rate_at_target.is_zero() {
        let rate = ctx.mul(&params.initial_rate_at_target, &curve_mult);
        return Ok(BorrowRateResult {
            avg_borrow_rate: rate.clone(),
            end_borrow_rate: rate,
            end_rate_at_target: params.initial_rate_at_target.clone(),
        });
    }

    // The adaptation exponent is driven by the error of the initial
    // utilization, so the end rate depends on total elapsed time only and
    // not on how the interval was chopped up
    let initial_err = normalized_error(initial_utilization, params, ctx);
    let speed = ctx.mul(&params.adjustment_speed, &initial_err);
    let linear_adaptation = ctx.mul(&speed, &BigDecimal::from(elapsed));
    let end_rate_at_target = ctx.mul(rate_at_target, &ctx.exp(&linear_adaptation));
    let end_borrow_rate = ctx.mul(&end_rate_at_target, &curve_mult);

    let avg_borrow_rate = if linear_adaptation.is_zero() {
        end_borrow_rate.clone()
    } else {
        // Closed-form time average of the exponentially adapting rate
        let start_borrow_rate = ctx.mul(rate_at_target, &curve_mult);
        ctx.div(&(&end_borrow_rate - &start_borrow_rate), &linear_adaptation)
    };

    Ok(BorrowRateResult {
        avg_borrow_rate,
        end_borrow_rate,
        end_rate_at_target,
    })
}
