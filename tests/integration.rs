//! Integration tests for the shift tracker.
//!
//! This test suite covers:
//! - The pay scenarios driven through the HTTP API
//! - Entry modes (hours, fixed, half of fixed)
//! - Month boundaries and ordering
//! - Cascading project deletion
//! - Store behaviour shared by the memory and SQLite backends
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use shift_tracker::api::{AppState, create_router};
use shift_tracker::config::DisplayConfig;
use shift_tracker::error::TrackerError;
use shift_tracker::models::{DateRange, NewProject, NewShift, YearMonth};
use shift_tracker::store::{MemoryStore, ShiftStore, SqliteStore};
use shift_tracker::tracker::{ChangeEvent, ShiftTracker};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn create_router_for_test() -> Router {
    let tracker = ShiftTracker::new(Arc::new(MemoryStore::default()));
    create_router(AppState::new(tracker, DisplayConfig::default()))
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn create_project(router: &Router, name: &str, hourly: &str, fixed: &str) -> i64 {
    let (status, body) = send(
        router,
        "POST",
        "/projects",
        Some(json!({"name": name, "hourly_rate": hourly, "fixed_per_shift": fixed})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
    body["id"].as_i64().unwrap()
}

async fn create_shift(router: &Router, body: Value) -> (StatusCode, Value) {
    send(router, "POST", "/shifts", Some(body)).await
}

fn as_decimal(value: &Value) -> Decimal {
    decimal(value.as_str().expect("decimal serialized as string"))
}

// =============================================================================
// Pay scenarios
// =============================================================================

#[tokio::test]
async fn test_hourly_shift_pays_hours_times_rate() {
    let router = create_router_for_test();
    let cafe = create_project(&router, "Cafe", "300", "").await;

    let (status, line) = create_shift(
        &router,
        json!({"project_id": cafe, "date": "2026-01-10", "hours": "5"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(as_decimal(&line["pay"]), decimal("1500"));
    assert_eq!(line["basis"], "hourly");
    assert_eq!(line["pay_display"], "1 500,00 ₽");
    assert_eq!(line["date_display"], "10.01.2026");
}

#[tokio::test]
async fn test_fixed_project_ignores_hours() {
    let router = create_router_for_test();
    let stage = create_project(&router, "Stage", "", "2000").await;

    let (_, line) = create_shift(
        &router,
        json!({"project_id": stage, "date": "2026-01-10", "hours": "0"}),
    )
    .await;

    assert_eq!(as_decimal(&line["pay"]), decimal("2000"));
    assert_eq!(line["basis"], "fixed_per_shift");
    assert_eq!(line["description"], "fixed per shift");
}

#[tokio::test]
async fn test_manual_amount_overrides_project_rates() {
    let router = create_router_for_test();
    let both = create_project(&router, "Both", "300", "2000").await;

    let (_, line) = create_shift(
        &router,
        json!({
            "project_id": both,
            "date": "2026-01-10",
            "mode": "fixed",
            "hours": "8",
            "pay": "1200"
        }),
    )
    .await;

    assert_eq!(as_decimal(&line["pay"]), decimal("1200"));
    assert_eq!(line["basis"], "custom_pay");
    assert_eq!(line["description"], "8 h • manual amount");
}

#[tokio::test]
async fn test_half_fixed_mode_halves_the_amount() {
    let router = create_router_for_test();
    let stage = create_project(&router, "Stage", "", "2000").await;

    let (_, line) = create_shift(
        &router,
        json!({"project_id": stage, "date": "2026-01-10", "mode": "half_fixed", "pay": "2000"}),
    )
    .await;

    assert_eq!(as_decimal(&line["pay"]), decimal("1000"));
}

#[tokio::test]
async fn test_project_without_rates_pays_nothing() {
    let router = create_router_for_test();
    let volunteer = create_project(&router, "Volunteer", "", "").await;

    let (_, line) = create_shift(
        &router,
        json!({"project_id": volunteer, "date": "2026-01-10", "hours": "4"}),
    )
    .await;

    assert_eq!(as_decimal(&line["pay"]), Decimal::ZERO);
    assert_eq!(line["basis"], "unpaid");
}

// =============================================================================
// Month view
// =============================================================================

#[tokio::test]
async fn test_month_summary_totals_and_ordering() {
    let router = create_router_for_test();
    let cafe = create_project(&router, "Cafe", "300", "").await;
    let stage = create_project(&router, "Stage", "", "2000").await;

    create_shift(&router, json!({"project_id": cafe, "date": "2026-01-05", "hours": "5"})).await;
    create_shift(&router, json!({"project_id": stage, "date": "2026-01-20"})).await;
    create_shift(&router, json!({"project_id": cafe, "date": "2025-12-31", "hours": "8"})).await;
    create_shift(&router, json!({"project_id": cafe, "date": "2026-02-01", "hours": "8"})).await;

    let (status, month) = send(&router, "GET", "/months/2026-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(month["title"], "January 2026");
    assert_eq!(month["start_date"], "2026-01-01");
    assert_eq!(month["end_date"], "2026-01-31");
    assert_eq!(month["summary"]["count"], 2);
    assert_eq!(as_decimal(&month["summary"]["total_pay"]), decimal("3500"));
    assert_eq!(month["summary"]["total_display"], "3 500,00 ₽");

    let shifts = month["shifts"].as_array().unwrap();
    assert_eq!(shifts[0]["date"], "2026-01-20");
    assert_eq!(shifts[0]["project_name"], "Stage");
    assert_eq!(shifts[1]["date"], "2026-01-05");
}

#[tokio::test]
async fn test_empty_month() {
    let router = create_router_for_test();
    let (status, month) = send(&router, "GET", "/months/2024-02", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(month["end_date"], "2024-02-29");
    assert_eq!(month["summary"]["count"], 0);
    assert_eq!(as_decimal(&month["summary"]["total_pay"]), Decimal::ZERO);
    assert!(month["shifts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_deleting_project_removes_its_shifts() {
    let router = create_router_for_test();
    let cafe = create_project(&router, "Cafe", "300", "").await;
    let stage = create_project(&router, "Stage", "", "2000").await;
    create_shift(&router, json!({"project_id": cafe, "date": "2026-01-05", "hours": "5"})).await;
    create_shift(&router, json!({"project_id": stage, "date": "2026-01-06"})).await;

    let (status, _) = send(&router, "DELETE", &format!("/projects/{}", cafe), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, projects) = send(&router, "GET", "/projects", None).await;
    assert_eq!(projects.as_array().unwrap().len(), 1);

    let (_, month) = send(&router, "GET", "/months/2026-01", None).await;
    assert_eq!(month["summary"]["count"], 1);
    assert_eq!(as_decimal(&month["summary"]["total_pay"]), decimal("2000"));
}

#[tokio::test]
async fn test_deleting_shift_updates_month() {
    let router = create_router_for_test();
    let cafe = create_project(&router, "Cafe", "300", "").await;
    let (_, line) =
        create_shift(&router, json!({"project_id": cafe, "date": "2026-01-05", "hours": "5"}))
            .await;

    let uri = format!("/shifts/{}", line["id"]);
    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, month) = send(&router, "GET", "/months/2026-01", None).await;
    assert_eq!(month["summary"]["count"], 0);
}

#[tokio::test]
async fn test_summarize_endpoint() {
    let router = create_router_for_test();
    let item = |id: i64, hours: &str, hourly: &str, fixed: &str| {
        json!({
            "shift": {"id": id, "project_id": 1, "date": "2026-01-10", "hours": hours,
                      "custom_pay": "0", "note": ""},
            "project": {"id": 1, "name": "P", "hourly_rate": hourly, "fixed_per_shift": fixed}
        })
    };

    let (status, summary) = send(
        &router,
        "POST",
        "/summarize",
        Some(json!({"items": [item(1, "5", "300", "0"), item(2, "0", "0", "2000")]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["count"], 2);
    assert_eq!(as_decimal(&summary["total_pay"]), decimal("3500"));
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_shift_for_unknown_project_returns_404() {
    let router = create_router_for_test();
    let (status, body) =
        create_shift(&router, json!({"project_id": 42, "date": "2026-01-05"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROJECT_NOT_FOUND");
}

#[tokio::test]
async fn test_shift_without_project_returns_400() {
    let router = create_router_for_test();
    let (status, body) = create_shift(&router, json!({"date": "2026-01-05"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SHIFT");
}

#[tokio::test]
async fn test_negative_amounts_are_rejected() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "POST",
        "/projects",
        Some(json!({"name": "Cafe", "hourly_rate": "-300"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PROJECT");

    let cafe = create_project(&router, "Cafe", "300", "").await;
    let (status, body) = create_shift(
        &router,
        json!({"project_id": cafe, "date": "2026-01-05", "hours": "-2"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SHIFT");
}

#[tokio::test]
async fn test_blank_project_name_is_rejected() {
    let router = create_router_for_test();
    let (status, body) = send(&router, "POST", "/projects", Some(json!({"name": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PROJECT");
}

#[tokio::test]
async fn test_bad_month_and_bad_json() {
    let router = create_router_for_test();

    let (status, body) = send(&router, "GET", "/months/january", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MONTH");

    let (status, body) = send(&router, "POST", "/summarize", Some(json!({"list": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Store behaviour, shared by both backends
// =============================================================================

async fn check_store_contract(store: Arc<dyn ShiftStore>) {
    let tracker = ShiftTracker::new(store);
    let mut events = tracker.subscribe();

    let warehouse = tracker
        .add_project(NewProject::new("Warehouse", decimal("250"), Decimal::ZERO).unwrap())
        .await
        .unwrap();
    let cafe = tracker
        .add_project(NewProject::new("Cafe", decimal("300"), decimal("2000")).unwrap())
        .await
        .unwrap();

    let names: Vec<String> = tracker
        .projects()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Cafe", "Warehouse"]);

    let new_shift = |project_id, date: &str, hours: &str, custom: &str| {
        NewShift::new(project_id, make_date(date), decimal(hours), decimal(custom), "").unwrap()
    };
    let first = tracker
        .add_shift(new_shift(cafe.id, "2026-01-15", "8", "1200"))
        .await
        .unwrap();
    let second = tracker
        .add_shift(new_shift(warehouse.id, "2026-01-15", "4", "0"))
        .await
        .unwrap();
    tracker
        .add_shift(new_shift(cafe.id, "2026-01-31", "5", "0"))
        .await
        .unwrap();
    tracker
        .add_shift(new_shift(cafe.id, "2026-02-01", "5", "0"))
        .await
        .unwrap();

    let view = tracker
        .month_view(YearMonth::new(2026, 1).unwrap())
        .await
        .unwrap();
    assert_eq!(view.summary.count, 3);
    // 1200 manual + 4 * 250 + 5 * 300
    assert_eq!(view.summary.total_pay, decimal("3700"));
    assert_eq!(view.shifts[0].shift.date, make_date("2026-01-31"));
    assert_eq!(view.shifts[1].shift.id, second.shift.id);
    assert_eq!(view.shifts[2].shift.id, first.shift.id);

    assert!(matches!(
        tracker.add_shift(new_shift(999, "2026-01-15", "1", "0")).await,
        Err(TrackerError::ProjectNotFound { id: 999 })
    ));

    tracker.delete_project(cafe.id).await.unwrap();
    let remaining = tracker
        .shifts_in(DateRange {
            start_date: make_date("2026-01-01"),
            end_date: make_date("2026-12-31"),
        })
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].project.id, warehouse.id);

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(seen.len(), 7);
    assert_eq!(seen.last(), Some(&ChangeEvent::ProjectDeleted(cafe.id)));
}

#[tokio::test]
async fn test_memory_store_contract() {
    check_store_contract(Arc::new(MemoryStore::default())).await;
}

#[tokio::test]
async fn test_sqlite_store_contract() {
    let store = SqliteStore::connect("sqlite::memory:", 5)
        .await
        .expect("Failed to open in-memory database");
    check_store_contract(Arc::new(store)).await;
}
