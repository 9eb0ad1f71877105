//! Aggregation of shifts into a [`Summary`].

use rust_decimal::Decimal;

use super::calc_pay;
use crate::models::{ShiftWithProject, Summary};

/// Reduces a list of shifts to their count and total pay.
///
/// The total is a decimal sum, so the result does not depend on the order
/// of `items` and accumulates no rounding drift. Addition saturates at the
/// `Decimal` bounds.
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::summarize;
/// use rust_decimal::Decimal;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.count, 0);
/// assert_eq!(summary.total_pay, Decimal::ZERO);
/// ```
pub fn summarize(items: &[ShiftWithProject]) -> Summary {
    let total_pay = items
        .iter()
        .map(|item| calc_pay(&item.shift, &item.project))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    Summary {
        count: items.len(),
        total_pay,
    }
}
