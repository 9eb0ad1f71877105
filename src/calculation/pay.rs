//! Per-shift pay calculation.
//!
//! A shift is paid by the first rule that applies:
//!
//! 1. a positive `custom_pay` on the shift,
//! 2. the project's hourly rate times the shift's hours,
//! 3. the project's fixed amount per shift,
//! 4. nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Project, Shift};

/// The rule that determined a shift's pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBasis {
    /// The shift's manually entered amount.
    CustomPay,
    /// Hours worked at the project's hourly rate.
    Hourly,
    /// The project's flat amount per shift.
    FixedPerShift,
    /// No usable rate; the shift pays zero.
    Unpaid,
}

/// Determines which pay rule applies to a shift.
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::{PayBasis, pay_basis};
/// use shift_tracker::models::{Project, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let project = Project {
///     id: 1,
///     name: "Cafe".to_string(),
///     hourly_rate: Decimal::ZERO,
///     fixed_per_shift: Decimal::new(2000, 0),
/// };
/// let shift = Shift {
///     id: 1,
///     project_id: 1,
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     hours: Decimal::ZERO,
///     custom_pay: Decimal::ZERO,
///     note: String::new(),
/// };
///
/// assert_eq!(pay_basis(&shift, &project), PayBasis::FixedPerShift);
/// ```
pub fn pay_basis(shift: &Shift, project: &Project) -> PayBasis {
    if shift.has_custom_pay() {
        PayBasis::CustomPay
    } else if project.has_hourly_rate() {
        PayBasis::Hourly
    } else if project.has_fixed_rate() {
        PayBasis::FixedPerShift
    } else {
        PayBasis::Unpaid
    }
}

/// Computes the pay owed for one shift.
///
/// Never fails. Inputs are expected to be non-negative; that is checked
/// when shifts and projects are created, not here. The hourly product
/// saturates at the `Decimal` bounds rather than overflowing.
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::calc_pay;
/// use shift_tracker::models::{Project, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let project = Project {
///     id: 1,
///     name: "Cafe".to_string(),
///     hourly_rate: Decimal::new(300, 0),
///     fixed_per_shift: Decimal::ZERO,
/// };
/// let shift = Shift {
///     id: 1,
///     project_id: 1,
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     hours: Decimal::new(5, 0),
///     custom_pay: Decimal::ZERO,
///     note: String::new(),
/// };
///
/// assert_eq!(calc_pay(&shift, &project), Decimal::new(1500, 0));
/// ```
pub fn calc_pay(shift: &Shift, project: &Project) -> Decimal {
    match pay_basis(shift, project) {
        PayBasis::CustomPay => shift.custom_pay,
        PayBasis::Hourly => shift.hours.saturating_mul(project.hourly_rate),
        PayBasis::FixedPerShift => project.fixed_per_shift,
        PayBasis::Unpaid => Decimal::ZERO,
    }
}
