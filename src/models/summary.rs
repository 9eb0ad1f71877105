//! Summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shift count and total pay for a set of shifts.
///
/// Derived on demand from a list of shifts; never stored.
///
/// # Example
///
/// ```
/// use shift_tracker::models::Summary;
/// use rust_decimal::Decimal;
///
/// let summary = Summary::default();
/// assert_eq!(summary.count, 0);
/// assert_eq!(summary.total_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of shifts in the evaluated set.
    pub count: usize,
    /// Sum of each shift's computed pay.
    pub total_pay: Decimal,
}
