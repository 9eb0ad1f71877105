//! Project model.
//!
//! A project is a named pay configuration: an hourly rate, a fixed amount
//! per shift, both, or neither. A zero rate means the rate is not used.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Store-assigned project identifier.
pub type ProjectId = i64;

/// A persisted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, stable once assigned.
    pub id: ProjectId,
    /// Display label.
    pub name: String,
    /// Pay per hour worked; zero when unused.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Flat pay per shift; zero when unused.
    #[serde(default)]
    pub fixed_per_shift: Decimal,
}

impl Project {
    /// Returns true if the project pays by the hour.
    pub fn has_hourly_rate(&self) -> bool {
        self.hourly_rate > Decimal::ZERO
    }

    /// Returns true if the project pays a flat amount per shift.
    pub fn has_fixed_rate(&self) -> bool {
        self.fixed_per_shift > Decimal::ZERO
    }
}

/// A project that has passed input checks but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    name: String,
    hourly_rate: Decimal,
    fixed_per_shift: Decimal,
}

impl NewProject {
    /// Checks and builds a new project.
    ///
    /// The name is trimmed and must not be blank. Rates must not be negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::models::NewProject;
    /// use rust_decimal::Decimal;
    ///
    /// let project = NewProject::new("  Warehouse ", Decimal::new(300, 0), Decimal::ZERO).unwrap();
    /// assert_eq!(project.name(), "Warehouse");
    ///
    /// assert!(NewProject::new("   ", Decimal::ZERO, Decimal::ZERO).is_err());
    /// ```
    pub fn new(
        name: &str,
        hourly_rate: Decimal,
        fixed_per_shift: Decimal,
    ) -> TrackerResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("name", "must not be blank"));
        }
        if hourly_rate < Decimal::ZERO {
            return Err(invalid("hourly_rate", "must not be negative"));
        }
        if fixed_per_shift < Decimal::ZERO {
            return Err(invalid("fixed_per_shift", "must not be negative"));
        }

        Ok(Self {
            name: name.to_string(),
            hourly_rate,
            fixed_per_shift,
        })
    }

    /// The trimmed project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// The fixed amount per shift.
    pub fn fixed_per_shift(&self) -> Decimal {
        self.fixed_per_shift
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            hourly_rate: self.hourly_rate,
            fixed_per_shift: self.fixed_per_shift,
        }
    }
}

fn invalid(field: &str, message: &str) -> TrackerError {
    TrackerError::InvalidProject {
        field: field.to_string(),
        message: message.to_string(),
    }
}
