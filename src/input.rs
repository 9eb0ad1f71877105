//! Sanitization of user-entered text.
//!
//! Entry forms deliver amounts as free text. This module turns that text
//! into decimals and pre-computes the manual pay of a shift from the entry
//! mode the user picked, so the pay calculation only ever sees plain values.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parses an amount typed by a user.
///
/// Accepts either `.` or `,` as the decimal separator. Empty or unparsable
/// text becomes zero. Negative numbers are returned as-is and rejected later
/// when the project or shift is built.
///
/// # Examples
///
/// ```
/// use shift_tracker::input::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("12,5"), Decimal::new(125, 1));
/// assert_eq!(parse_amount(" 300 "), Decimal::new(300, 0));
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// ```
pub fn parse_amount(text: &str) -> Decimal {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Half of a positive amount; zero otherwise.
pub fn half_of(amount: Decimal) -> Decimal {
    if amount > Decimal::ZERO {
        amount / Decimal::TWO
    } else {
        Decimal::ZERO
    }
}

/// How the user chose to enter a shift's pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMode {
    /// Pay comes from the project's rates.
    #[default]
    Hours,
    /// The entered amount is the shift's pay.
    Fixed,
    /// Half of the entered amount is the shift's pay.
    HalfFixed,
}

/// The manual pay to store for a shift entered in `mode`.
///
/// # Examples
///
/// ```
/// use shift_tracker::input::{EntryMode, custom_pay_for};
/// use rust_decimal::Decimal;
///
/// assert_eq!(custom_pay_for(EntryMode::Hours, "2000"), Decimal::ZERO);
/// assert_eq!(custom_pay_for(EntryMode::Fixed, "2000"), Decimal::new(2000, 0));
/// assert_eq!(custom_pay_for(EntryMode::HalfFixed, "2000"), Decimal::new(1000, 0));
/// ```
pub fn custom_pay_for(mode: EntryMode, pay_text: &str) -> Decimal {
    match mode {
        EntryMode::Hours => Decimal::ZERO,
        EntryMode::Fixed => parse_amount(pay_text),
        EntryMode::HalfFixed => half_of(parse_amount(pay_text)),
    }
}
