//! Response types for the shift tracker API.
//!
//! This module defines the month view body, the error response structures
//! and the mapping from [`TrackerError`] to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayBasis;
use crate::config::DisplayConfig;
use crate::display::{describe_pay, format_date, format_money, month_title};
use crate::error::TrackerError;
use crate::models::{ProjectId, ShiftId, ShiftWithProject, Summary};
use crate::tracker::MonthView;

/// One shift as shown in a month list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftLine {
    /// Shift id.
    pub id: ShiftId,
    /// Project id.
    pub project_id: ProjectId,
    /// Project name.
    pub project_name: String,
    /// Shift date.
    pub date: NaiveDate,
    /// Shift date formatted for display.
    pub date_display: String,
    /// Hours worked.
    pub hours: Decimal,
    /// Free-text note.
    pub note: String,
    /// Pay owed for the shift.
    pub pay: Decimal,
    /// Pay formatted for display.
    pub pay_display: String,
    /// The rule that produced `pay`.
    pub basis: PayBasis,
    /// Info line, e.g. `5 h • at 300,00 ₽/h`.
    pub description: String,
}

impl ShiftLine {
    /// Renders a shift with the given display settings.
    pub fn new(item: &ShiftWithProject, display: &DisplayConfig) -> Self {
        let pay = item.pay();
        Self {
            id: item.shift.id,
            project_id: item.project.id,
            project_name: item.project.name.clone(),
            date: item.shift.date,
            date_display: format_date(item.shift.date, &display.date_format),
            hours: item.shift.hours,
            note: item.shift.note.clone(),
            pay,
            pay_display: format_money(pay, &display.currency_symbol),
            basis: item.basis(),
            description: describe_pay(&item.shift, &item.project, &display.currency_symbol),
        }
    }
}

/// Totals block of a month response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBody {
    /// Number of shifts.
    pub count: usize,
    /// Sum of pay.
    pub total_pay: Decimal,
    /// Sum of pay formatted for display.
    pub total_display: String,
}

impl SummaryBody {
    fn new(summary: Summary, display: &DisplayConfig) -> Self {
        Self {
            count: summary.count,
            total_pay: summary.total_pay,
            total_display: format_money(summary.total_pay, &display.currency_symbol),
        }
    }
}

/// Response body for `GET /months/:month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthResponse {
    /// The month as `YYYY-MM`.
    pub month: String,
    /// Title such as `January 2026`.
    pub title: String,
    /// First day of the month.
    pub start_date: NaiveDate,
    /// Last day of the month.
    pub end_date: NaiveDate,
    /// Month totals.
    pub summary: SummaryBody,
    /// Shifts, newest first.
    pub shifts: Vec<ShiftLine>,
}

impl MonthResponse {
    /// Renders a month view with the given display settings.
    pub fn new(view: &MonthView, display: &DisplayConfig) -> Self {
        let range = view.month.range();
        Self {
            month: view.month.to_string(),
            title: month_title(view.month),
            start_date: range.start_date,
            end_date: range.end_date,
            summary: SummaryBody::new(view.summary, display),
            shifts: view
                .shifts
                .iter()
                .map(|item| ShiftLine::new(item, display))
                .collect(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        let message = error.to_string();
        match error {
            TrackerError::ConfigNotFound { .. } | TrackerError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            TrackerError::ProjectNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("PROJECT_NOT_FOUND", message),
            },
            TrackerError::ShiftNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SHIFT_NOT_FOUND", message),
            },
            TrackerError::InvalidProject { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_PROJECT",
                    message,
                    format!("Check the '{}' field", field),
                ),
            ),
            TrackerError::InvalidShift { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    format!("Check the '{}' field", field),
                ),
            ),
            TrackerError::InvalidMonth { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details("INVALID_MONTH", message, "Expected a month as YYYY-MM"),
            ),
            TrackerError::Storage { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage failure", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, Shift, YearMonth};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_error_statuses() {
        let cases = [
            (TrackerError::ProjectNotFound { id: 1 }, StatusCode::NOT_FOUND),
            (TrackerError::ShiftNotFound { id: 1 }, StatusCode::NOT_FOUND),
            (
                TrackerError::InvalidShift {
                    field: "hours".to_string(),
                    message: "must not be negative".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                TrackerError::InvalidMonth {
                    value: "2026-13".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                TrackerError::Storage {
                    message: "disk full".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, status);
        }
    }

    #[test]
    fn test_month_response_rendering() {
        let project = Project {
            id: 1,
            name: "Cafe".to_string(),
            hourly_rate: dec("300"),
            fixed_per_shift: Decimal::ZERO,
        };
        let shift = Shift {
            id: 9,
            project_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            hours: dec("5"),
            custom_pay: Decimal::ZERO,
            note: String::new(),
        };
        let view = MonthView {
            month: YearMonth::new(2026, 1).unwrap(),
            shifts: vec![ShiftWithProject { shift, project }],
            summary: Summary {
                count: 1,
                total_pay: dec("1500"),
            },
        };

        let body = MonthResponse::new(&view, &DisplayConfig::default());
        assert_eq!(body.month, "2026-01");
        assert_eq!(body.title, "January 2026");
        assert_eq!(body.end_date, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
        assert_eq!(body.summary.total_display, "1 500,00 ₽");

        let line = &body.shifts[0];
        assert_eq!(line.date_display, "15.01.2026");
        assert_eq!(line.pay, dec("1500"));
        assert_eq!(line.basis, PayBasis::Hourly);
        assert_eq!(line.description, "5 h • at 300,00 ₽/h");
    }
}
