//! Adaptive Curve Rate Simulation SDK
//!
//! This crate simulates lending markets whose borrow rate is set by an
//! adaptive curve model: a feedback controller that steers utilization
//! toward a target by drifting the rate at target exponentially over time.
//!
//! # Overview
//!
//! The simulation SDK allows you to:
//! - Evaluate the adaptive curve model: utilization error, curve multiplier
//!   and closed-form average borrow rate over an interval
//! - Accrue continuously compounded interest on a market snapshot
//! - Step a market through time at a chosen accrual period and record the
//!   borrow balance trajectory
//! - Carry out every computation in arbitrary-precision decimal arithmetic,
//!   so runs at different accrual frequencies can be compared far below
//!   floating-point resolution
//!
//! # Example
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use ratelab_sim::math::{weeks, MathContext};
//! use ratelab_sim::simulation::{run, Scenario};
//!
//! let ctx = MathContext::default();
//! let scenario = Scenario::standard(ctx);
//!
//! // Ten weeks of interest, accrued once a day
//! let result = run(&scenario, weeks(10), 86_400, ctx).unwrap();
//!
//! let growth = &result.market.total_borrow - &scenario.initial_borrow;
//! assert!(growth > BigDecimal::from(0));
//! ```

pub mod error;
pub mod irm;
pub mod market;
pub mod math;
pub mod simulation;

// Re-export commonly used types
pub use error::SimError;

// IRM exports
pub use irm::{curve, get_borrow_rate, normalized_error, BorrowRateResult, IrmParams};

// Market exports
pub use market::{get_accrued_interest, Market};

// Math exports
pub use math::{weeks, MathContext, DEFAULT_PRECISION, SECONDS_PER_YEAR};

// Simulation exports
pub use simulation::{run, Sample, Scenario, SimulationRun};
