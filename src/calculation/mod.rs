//! Calculation logic for the shift tracker.
//!
//! This module contains the per-shift pay rule and the aggregation of a
//! month's shifts into a summary. Both are pure functions with no failure
//! mode.

mod pay;
mod summary;

pub use pay::{PayBasis, calc_pay, pay_basis};
pub use summary::summarize;
