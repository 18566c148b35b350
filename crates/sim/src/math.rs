//! Fixed-precision decimal arithmetic for the simulation.
//!
//! All market math runs on [`bigdecimal::BigDecimal`] through a [`MathContext`],
//! which pins every operation to a fixed number of significant digits for the
//! whole run. Comparing accrual frequencies means measuring differences far
//! below anything `f64` can resolve, so the engine carries 128 significant
//! digits by default and never goes through floating point.
//!
//! # How the operations work
//!
//! `BigDecimal`'s `/` operator rounds its result to the crate's own default
//! precision, not ours, so [`MathContext::div`] computes the quotient from the
//! raw integer parts with guard digits and rounds once at the end. The crate
//! has no exponential at all; [`MathContext::exp`] uses argument reduction
//! (halve until the Taylor series converges quickly, square back up) and
//! [`MathContext::expm1`] sums the series without its constant term so small
//! arguments keep full relative accuracy.
//!
//! # Example
//!
//! ```rust
//! use ratelab_sim::math::MathContext;
//! use bigdecimal::BigDecimal;
//!
//! let ctx = MathContext::new(64);
//! let one = BigDecimal::from(1);
//! let three = BigDecimal::from(3);
//!
//! // 1/3 carried to 64 significant digits
//! let third = ctx.div(&one, &three);
//! assert!(third.to_string().starts_with("0.33333333333333333333"));
//! ```

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, One, Zero};

/// Seconds in a 365-day year
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Default number of significant digits carried by a [`MathContext`].
///
/// Runs can drop to 64 digits to go faster and still resolve the
/// differences between accrual frequencies.
pub const DEFAULT_PRECISION: u64 = 128;

/// Extra digits carried through intermediate steps so truncation can never
/// reach the digits a context promises
const GUARD_DIGITS: u64 = 8;

/// Converts a number of weeks to seconds.
pub const fn weeks(n: u64) -> u64 {
    n * 7 * 24 * 60 * 60
}

/// Fixed significant-digit precision for one simulation run.
///
/// A context is cheap to copy and is passed by value into every arithmetic
/// call site, so two runs at different precisions can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    digits: u64,
}

impl Default for MathContext {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl MathContext {
    /// Creates a context carrying `digits` significant digits (at least 1).
    pub fn new(digits: u64) -> Self {
        Self {
            digits: digits.max(1),
        }
    }

    /// The number of significant digits this context carries.
    pub fn digits(self) -> u64 {
        self.digits
    }

    /// Rounds a value to the context's significant digits.
    ///
    /// Values already inside the precision are returned unchanged, so exact
    /// results (sums, short products) stay exact.
    pub fn round(self, value: BigDecimal) -> BigDecimal {
        if value.digits() > self.digits {
            value.with_prec(self.digits)
        } else {
            value
        }
    }

    /// Product of `a` and `b`, rounded to the context precision.
    pub fn mul(self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a * b)
    }

    /// Quotient `a / b`, rounded to the context precision.
    ///
    /// The divisor must be nonzero; every caller in the engine guards this
    /// (supply is checked positive, periods nonzero, curve denominators are
    /// fixed parameters).
    pub fn div(self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        if a.is_zero() {
            return BigDecimal::zero();
        }

        let (a_int, a_scale) = a.as_bigint_and_exponent();
        let (b_int, b_scale) = b.as_bigint_and_exponent();

        // Scale the numerator so the integer quotient keeps guard digits
        // beyond the context precision, then round once.
        let shift = (self.digits + GUARD_DIGITS + b.digits()).saturating_sub(a.digits());
        let quotient = a_int * ten_to_the(shift) / b_int;

        self.round(BigDecimal::new(quotient, a_scale - b_scale + shift as i64))
    }

    /// `e^x` at the context precision.
    ///
    /// The argument is halved until it is small enough for the Taylor series
    /// to converge quickly (halving is exact in decimal), then the result is
    /// squared back up. Same reduce/evaluate/scale-back structure as a
    /// fixed-point `exp`, carried out at arbitrary precision.
    pub fn exp(self, x: &BigDecimal) -> BigDecimal {
        if x.is_zero() {
            return BigDecimal::one();
        }

        let limit = taylor_limit();
        let mut reduced = x.clone();
        let mut halvings = 0u64;
        while reduced.abs() > limit {
            reduced = reduced.half();
            halvings += 1;
        }

        // Each squaring can double the relative error, so widen the working
        // precision by one digit per halving.
        let working = self.widened(halvings + GUARD_DIGITS);
        let mut result = working.taylor_expm1(&reduced) + BigDecimal::one();
        for _ in 0..halvings {
            result = working.mul(&result, &result);
        }

        self.round(result)
    }

    /// `e^x - 1` at the context precision, accurate for small `x`.
    ///
    /// For `|x|` below the series limit the Taylor sum starts at the linear
    /// term, so a result like `1e-30` keeps all its significant digits where
    /// `exp(x) - 1` would cancel most of them away.
    pub fn expm1(self, x: &BigDecimal) -> BigDecimal {
        if x.is_zero() {
            return BigDecimal::zero();
        }

        let working = self.widened(GUARD_DIGITS);
        if x.abs() <= taylor_limit() {
            self.round(working.taylor_expm1(x))
        } else {
            self.round(working.exp(x) - BigDecimal::one())
        }
    }

    /// Taylor series of `e^x - 1`. Callers keep `|x|` at or below the series
    /// limit so successive terms shrink at least fourfold.
    fn taylor_expm1(self, x: &BigDecimal) -> BigDecimal {
        // The sum stays within a small factor of x, so a tolerance relative
        // to x bounds the relative error of the result.
        let tolerance = x.abs() * BigDecimal::new(BigInt::one(), self.digits as i64 + 1);

        let mut sum = x.clone();
        let mut term = x.clone();
        let mut n = 2u64;
        loop {
            term = self.div(&self.mul(&term, x), &BigDecimal::from(n));
            sum += &term;
            if term.abs() < tolerance {
                return sum;
            }
            n += 1;
        }
    }

    fn widened(self, extra: u64) -> MathContext {
        MathContext::new(self.digits + extra)
    }
}

/// Largest argument magnitude handed to the Taylor series (1/4).
fn taylor_limit() -> BigDecimal {
    BigDecimal::new(BigInt::from(25), 2)
}

fn ten_to_the(power: u64) -> BigInt {
    // Exponents here stay near the context precision, far inside u32.
    BigInt::from(10u8).pow(power.min(u64::from(u32::MAX)) as u32)
}
