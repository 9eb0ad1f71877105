//! HTTP request handlers for the shift tracker API.
//!
//! This module contains the handler functions for all API endpoints.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize;
use crate::error::TrackerError;
use crate::models::{NewProject, NewShift, ProjectId, ShiftId, YearMonth};

use super::request::{CreateProjectRequest, CreateShiftRequest, SummarizeRequest};
use super::response::{ApiError, ApiErrorResponse, MonthResponse, ShiftLine};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/projects", get(list_projects_handler).post(create_project_handler))
        .route("/projects/:id", delete(delete_project_handler))
        .route("/shifts", post(create_shift_handler))
        .route("/shifts/:id", delete(delete_shift_handler))
        .route("/months/:month", get(month_handler))
        .route("/summarize", post(summarize_handler))
        .with_state(state)
}

/// Turns a body rejection into a 400 response.
///
/// A missing required field is a validation problem; anything else about
/// the body is malformed JSON.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn error_response(correlation_id: Uuid, error: TrackerError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    ApiErrorResponse::from(error).into_response()
}

/// Handler for GET /projects.
async fn list_projects_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.tracker().projects().await {
        Ok(projects) => {
            info!(
                correlation_id = %correlation_id,
                count = projects.len(),
                "Listed projects"
            );
            (StatusCode::OK, Json(projects)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /projects.
async fn create_project_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create project request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = match NewProject::try_from(request) {
        Ok(project) => state.tracker().add_project(project).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /projects/:id.
async fn delete_project_handler(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.tracker().delete_project(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /shifts.
///
/// Responds with the stored shift rendered the same way as in a month view.
async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create shift request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = match NewShift::try_from(request) {
        Ok(shift) => state.tracker().add_shift(shift).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(item) => {
            let line = ShiftLine::new(&item, state.display());
            (StatusCode::CREATED, Json(line)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /shifts/:id.
async fn delete_shift_handler(State(state): State<AppState>, Path(id): Path<ShiftId>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.tracker().delete_shift(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /months/:month, where `month` is `YYYY-MM`.
async fn month_handler(State(state): State<AppState>, Path(month): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let result = match YearMonth::from_str(&month) {
        Ok(month) => state.tracker().month_view(month).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(view) => {
            info!(
                correlation_id = %correlation_id,
                month = %view.month,
                shifts_count = view.summary.count,
                total_pay = %view.summary.total_pay,
                "Month view served"
            );
            (StatusCode::OK, Json(MonthResponse::new(&view, state.display()))).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /summarize.
///
/// Totals caller-supplied shifts without touching storage.
async fn summarize_handler(payload: Result<Json<SummarizeRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let summary = summarize(&request.items);
    info!(
        correlation_id = %correlation_id,
        count = summary.count,
        total_pay = %summary.total_pay,
        "Summarized shifts"
    );
    (StatusCode::OK, Json(summary)).into_response()
}
