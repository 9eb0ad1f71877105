//! Human-readable formatting for money, dates and shift rows.

use std::fmt::Write;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::{PayBasis, pay_basis};
use crate::models::{Project, Shift, YearMonth};

/// Default pattern for shift dates, e.g. `15.01.2026`.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Formats an amount with two decimals, space-separated thousands, a comma
/// decimal separator and a currency suffix.
///
/// # Examples
///
/// ```
/// use shift_tracker::display::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(12345, 1), "₽"), "1 234,50 ₽");
/// assert_eq!(format_money(Decimal::ZERO, ""), "0,00");
/// ```
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    // {:.2} pads to exactly two decimals
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let number = format!("{}{},{}", sign, grouped, fraction);
    if currency.is_empty() {
        number
    } else {
        format!("{} {}", number, currency)
    }
}

/// Returns true if chrono understands every item of a `strftime` pattern.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats a date with a chrono `strftime` pattern.
///
/// Falls back to [`DEFAULT_DATE_FORMAT`] when the pattern cannot be rendered.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut formatted = String::new();
    if write!(formatted, "{}", date.format(pattern)).is_err() {
        return date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    formatted
}

/// Title for a month, e.g. `January 2026`.
pub fn month_title(month: YearMonth) -> String {
    month.first_day().format("%B %Y").to_string()
}

/// The info line shown under a shift: hours worked and how it was paid.
///
/// Returns an empty string when there is nothing to say.
///
/// # Examples
///
/// ```
/// use shift_tracker::display::describe_pay;
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
/// assert_eq!(describe_pay(&shift, &project, "₽"), "5 h • at 300,00 ₽/h");
/// ```
pub fn describe_pay(shift: &Shift, project: &Project, currency: &str) -> String {
    let mut parts = Vec::with_capacity(2);

    if shift.hours > Decimal::ZERO {
        parts.push(format!("{} h", shift.hours.normalize()));
    }

    match pay_basis(shift, project) {
        PayBasis::CustomPay => parts.push("manual amount".to_string()),
        PayBasis::Hourly => parts.push(format!(
            "at {}/h",
            format_money(project.hourly_rate, currency)
        )),
        PayBasis::FixedPerShift => parts.push("fixed per shift".to_string()),
        PayBasis::Unpaid => {}
    }

    parts.join(" • ")
}
