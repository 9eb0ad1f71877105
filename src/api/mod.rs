//! HTTP API module for the shift tracker.
//!
//! This module provides the REST endpoints for managing projects, logging
//! shifts and reading monthly summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateProjectRequest, CreateShiftRequest, SummarizeRequest};
pub use response::{ApiError, MonthResponse, ShiftLine, SummaryBody};
pub use state::AppState;
