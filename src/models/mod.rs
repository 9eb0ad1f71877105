//! Core data models for the shift tracker.
//!
//! This module contains the domain models shared by the calculation,
//! storage and API layers.

mod period;
mod project;
mod shift;
mod summary;

pub use period::{DateRange, YearMonth};
pub use project::{NewProject, Project, ProjectId};
pub use shift::{NewShift, Shift, ShiftId, ShiftWithProject};
pub use summary::Summary;

pub(crate) use shift::invalid as invalid_shift;
