//! Calendar month and date range models.
//!
//! This module contains the [`YearMonth`] and [`DateRange`] types used to
//! scope shift queries and summaries to one calendar month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// An inclusive range of calendar dates.
///
/// # Example
///
/// ```
/// use shift_tracker::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())); // start date
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap())); // end date
/// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date in the range (inclusive).
    pub start_date: NaiveDate,
    /// The last date in the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Checks if a given date falls within this range, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// A calendar month.
///
/// Always refers to a month chrono can represent; construction validates
/// the year and month.
///
/// # Example
///
/// ```
/// use shift_tracker::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let february = YearMonth::new(2024, 2).unwrap();
/// assert_eq!(february.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(february.next().to_string(), "2024-03");
/// assert_eq!(february.prev().to_string(), "2024-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Creates a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> TrackerResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| TrackerError::InvalidMonth {
                value: format!("{:04}-{:02}", year, month),
            })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The whole month as an inclusive date range.
    pub fn range(&self) -> DateRange {
        DateRange {
            start_date: self.first_day(),
            end_date: self.last_day(),
        }
    }

    /// The previous month. Stays put at the earliest representable month.
    pub fn prev(&self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// The next month. Stays put at the latest representable month.
    pub fn next(&self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackerError::InvalidMonth {
            value: s.to_string(),
        };

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}
