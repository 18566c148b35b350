//! Market state and interest accrual.
//!
//! A [`Market`] is a lending pool snapshot: assets supplied, assets
//! borrowed, and the rate at target utilization the adaptive model has
//! settled on. Accrual advances the snapshot in time.
//!
//! # How accrual works
//!
//! [`Market::accrue_interest`] asks the model for the average borrow rate
//! over the interval and compounds the borrowed assets continuously at that
//! rate:
//!
//! ```text
//! interest = total_borrow * (exp(avg_rate * elapsed) - 1)
//! ```
//!
//! The interest is added to both sides of the market, so utilization drifts
//! as borrow and supply grow at different relative speeds. There are no
//! fees and no share accounting here: the market tracks raw assets, which
//! keeps every figure exact at the working precision.
//!
//! # Example
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use ratelab_sim::irm::IrmParams;
//! use ratelab_sim::market::Market;
//! use ratelab_sim::math::{weeks, MathContext};
//!
//! let ctx = MathContext::default();
//! let params = IrmParams::standard(ctx);
//! let market = Market::new(
//!     BigDecimal::from(100),
//!     BigDecimal::from(95),
//!     params.initial_rate_at_target.clone(),
//!     ctx,
//! )
//! .unwrap();
//!
//! let later = market.accrue_interest(weeks(1), &params, ctx).unwrap();
//! assert!(later.total_borrow > market.total_borrow);
//! assert!(later.total_supply > market.total_supply);
//! ```

use bigdecimal::BigDecimal;

use crate::error::SimError;
use crate::irm::{get_borrow_rate, IrmParams};
use crate::math::MathContext;

/// State of a lending market at a point in time
#[derive(Debug, Clone)]
pub struct Market {
    /// Total assets supplied to the market
    pub total_supply: BigDecimal,

    /// Total assets borrowed from the market
    pub total_borrow: BigDecimal,

    /// Current rate at target utilization (per second)
    pub rate_at_target: BigDecimal,

    /// Utilization at market creation, which drives the adaptation speed
    /// for the market's whole life
    pub initial_utilization: BigDecimal,

    /// Seconds accrued since market creation
    pub elapsed_total: u64,
}

impl Market {
    /// Creates a market from its initial balances.
    ///
    /// The utilization at creation is captured here and pins the model's
    /// adaptation speed from then on.
    ///
    /// # Errors
    ///
    /// - [`SimError::NonPositiveSupply`] if `total_supply` is zero or negative
    pub fn new(
        total_supply: BigDecimal,
        total_borrow: BigDecimal,
        rate_at_target: BigDecimal,
        ctx: MathContext,
    ) -> Result<Self, SimError> {
        if total_supply <= BigDecimal::from(0) {
            return Err(SimError::NonPositiveSupply {
                supply: total_supply,
            });
        }
        let initial_utilization = ctx.div(&total_borrow, &total_supply);
        Ok(Self {
            total_supply,
            total_borrow,
            rate_at_target,
            initial_utilization,
            elapsed_total: 0,
        })
    }

    /// Current utilization: borrowed assets as a fraction of supplied assets
    pub fn utilization(&self, ctx: MathContext) -> BigDecimal {
        ctx.div(&self.total_borrow, &self.total_supply)
    }

    /// Returns the market advanced by `elapsed` seconds of interest.
    ///
    /// The accrued interest lands on both the borrow and the supply side,
    /// and the rate at target is replaced by the model's adapted value.
    ///
    /// # Errors
    ///
    /// - [`SimError::NonPositiveSupply`] if the market's supply is not positive
    pub fn accrue_interest(
        &self,
        elapsed: u64,
        params: &IrmParams,
        ctx: MathContext,
    ) -> Result<Self, SimError> {
        let rates = get_borrow_rate(
            &self.total_borrow,
            &self.total_supply,
            &self.rate_at_target,
            &self.initial_utilization,
            elapsed,
            params,
            ctx,
        )?;
        let interest =
            get_accrued_interest(&rates.avg_borrow_rate, &self.total_borrow, elapsed, ctx);

        Ok(Self {
            total_supply: &self.total_supply + &interest,
            total_borrow: &self.total_borrow + &interest,
            rate_at_target: rates.end_rate_at_target,
            initial_utilization: self.initial_utilization.clone(),
            elapsed_total: self.elapsed_total + elapsed,
        })
    }
}

/// Interest earned by continuously compounding `total_borrow` at `avg_rate`
/// for `elapsed` seconds.
pub fn get_accrued_interest(
    avg_rate: &BigDecimal,
    total_borrow: &BigDecimal,
    elapsed: u64,
    ctx: MathContext,
) -> BigDecimal {
    let exponent = ctx.mul(avg_rate, &BigDecimal::from(elapsed));
    ctx.mul(total_borrow, &ctx.expm1(&exponent))
}
