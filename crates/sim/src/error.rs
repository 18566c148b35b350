//! Error types for the simulation library.

use bigdecimal::BigDecimal;
use thiserror::Error;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// A rate or accrual computation was attempted on a market with no supply
    #[error("Invalid market state: total supply {supply} is not positive")]
    NonPositiveSupply { supply: BigDecimal },

    /// A stepping loop was configured with an accrual period of zero seconds
    #[error("Invalid accrual period: period must be a positive number of seconds")]
    ZeroPeriod,
}
