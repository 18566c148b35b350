//! Command implementations.

pub mod compare;
pub mod run;

pub use compare::run_compare;
pub use run::run_simulation;
