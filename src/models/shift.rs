//! Shift model and related types.
//!
//! This module defines the [`Shift`] record, its unsaved counterpart
//! [`NewShift`], and [`ShiftWithProject`], the pair returned by date-range
//! queries and consumed by the pay calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Project, ProjectId};
use crate::calculation::{PayBasis, calc_pay, pay_basis};
use crate::error::{TrackerError, TrackerResult};

/// Store-assigned shift identifier.
pub type ShiftId = i64;

/// One logged work event.
///
/// Shifts are immutable once stored; the only change allowed is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: ShiftId,
    /// The project this shift was worked for.
    pub project_id: ProjectId,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Hours worked, used only for hourly pay.
    #[serde(default)]
    pub hours: Decimal,
    /// Manually entered pay; a positive value overrides any project rate.
    #[serde(default)]
    pub custom_pay: Decimal,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

impl Shift {
    /// Returns true if the shift carries a manual pay override.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::models::Shift;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: 1,
    ///     project_id: 1,
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     hours: Decimal::new(8, 0),
    ///     custom_pay: Decimal::new(1200, 0),
    ///     note: String::new(),
    /// };
    /// assert!(shift.has_custom_pay());
    /// ```
    pub fn has_custom_pay(&self) -> bool {
        self.custom_pay > Decimal::ZERO
    }
}

/// A shift that has passed input checks but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
    project_id: ProjectId,
    date: NaiveDate,
    hours: Decimal,
    custom_pay: Decimal,
    note: String,
}

impl NewShift {
    /// Checks and builds a new shift.
    ///
    /// Hours and custom pay must not be negative. The note is kept as given.
    pub fn new(
        project_id: ProjectId,
        date: NaiveDate,
        hours: Decimal,
        custom_pay: Decimal,
        note: impl Into<String>,
    ) -> TrackerResult<Self> {
        if hours < Decimal::ZERO {
            return Err(invalid("hours", "must not be negative"));
        }
        if custom_pay < Decimal::ZERO {
            return Err(invalid("custom_pay", "must not be negative"));
        }

        Ok(Self {
            project_id,
            date,
            hours,
            custom_pay,
            note: note.into(),
        })
    }

    /// The referenced project.
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// The shift date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Hours worked.
    pub fn hours(&self) -> Decimal {
        self.hours
    }

    /// Manual pay override, zero when unused.
    pub fn custom_pay(&self) -> Decimal {
        self.custom_pay
    }

    /// The note.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: ShiftId) -> Shift {
        Shift {
            id,
            project_id: self.project_id,
            date: self.date,
            hours: self.hours,
            custom_pay: self.custom_pay,
            note: self.note,
        }
    }
}

pub(crate) fn invalid(field: &str, message: &str) -> TrackerError {
    TrackerError::InvalidShift {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// A shift joined with the project it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWithProject {
    /// The shift.
    pub shift: Shift,
    /// The project referenced by `shift.project_id`.
    pub project: Project,
}

impl ShiftWithProject {
    /// Pay owed for this shift.
    pub fn pay(&self) -> Decimal {
        calc_pay(&self.shift, &self.project)
    }

    /// Which pay rule applies to this shift.
    pub fn basis(&self) -> PayBasis {
        pay_basis(&self.shift, &self.project)
    }
}
