//! Request types for the shift tracker API.
//!
//! Amounts arrive as the text a user typed (`"12,5"`, `""`) and are
//! sanitized with [`crate::input`] before the domain types are built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::input::{EntryMode, custom_pay_for, parse_amount};
use crate::models::{NewProject, NewShift, ProjectId, ShiftWithProject, invalid_shift};

/// Request body for `POST /projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Display name of the project.
    pub name: String,
    /// Hourly rate as entered; blank means no hourly rate.
    #[serde(default)]
    pub hourly_rate: String,
    /// Fixed pay per shift as entered; blank means none.
    #[serde(default)]
    pub fixed_per_shift: String,
}

impl TryFrom<CreateProjectRequest> for NewProject {
    type Error = TrackerError;

    fn try_from(req: CreateProjectRequest) -> Result<Self, Self::Error> {
        NewProject::new(
            &req.name,
            parse_amount(&req.hourly_rate),
            parse_amount(&req.fixed_per_shift),
        )
    }
}

/// Request body for `POST /shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// The selected project; required.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// The shift date.
    pub date: NaiveDate,
    /// How the pay was entered.
    #[serde(default)]
    pub mode: EntryMode,
    /// Hours worked as entered.
    #[serde(default)]
    pub hours: String,
    /// Amount as entered, used by the fixed modes.
    #[serde(default)]
    pub pay: String,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

impl TryFrom<CreateShiftRequest> for NewShift {
    type Error = TrackerError;

    fn try_from(req: CreateShiftRequest) -> Result<Self, Self::Error> {
        let project_id = req
            .project_id
            .ok_or_else(|| invalid_shift("project_id", "a project must be selected"))?;

        NewShift::new(
            project_id,
            req.date,
            parse_amount(&req.hours),
            custom_pay_for(req.mode, &req.pay),
            req.note,
        )
    }
}

/// Request body for `POST /summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// The shifts to total, each with its project.
    pub items: Vec<ShiftWithProject>,
}
