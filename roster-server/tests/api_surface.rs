//! HTTP surface tests over a temp-file database
//!
//! Drives the composed router directly with tower's oneshot — no
//! listener. Covers the liveness probe, a full clock-in round trip and
//! the permission guards on the write surfaces.

use axum::body::Body;
use http::{Request, StatusCode, header};
use roster_server::api;
use roster_server::core::{Config, ServerState};
use tempfile::TempDir;
use tower::ServiceExt;

async fn state_with(role: &str) -> (TempDir, ServerState) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("roster.db");

    let mut config = Config::with_overrides(format!("sqlite://{}", db_path.display()), 0);
    config.session_role = role.into();

    let state = ServerState::initialize(&config).await.unwrap();
    (dir, state)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_probe_answers_ok() {
    let (_dir, state) = state_with("admin").await;
    let app = api::router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn clock_in_round_trip_over_http() {
    let (_dir, state) = state_with("admin").await;
    let app = api::router(state);

    // Create an employee first
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            serde_json::json!({
                "name": "Iris Vale",
                "email": "iris.vale@example.com",
                "phone": "555-0107",
                "role": "Barista",
                "department_id": null,
                "start_date": "2024-09-01",
                "hourly_rate": 16.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let employee = json_body(response).await;
    let employee_id = employee["id"].as_i64().unwrap();

    // Clock in
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/time-entries/clock-in",
            serde_json::json!({ "employee_id": employee_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["outcome"], "clocked_in");
    assert_eq!(body["entry"]["status"], "active");

    // Second clock-in degrades to the warning outcome
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/time-entries/clock-in",
            serde_json::json!({ "employee_id": employee_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["outcome"], "already_clocked_in");

    // The notification feed recorded both outcomes
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/notifications")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let feed = json_body(response).await;
    let titles: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Employee Added"));
    assert!(titles.contains(&"Clocked In"));
    assert!(titles.contains(&"Already Clocked In"));
}

#[tokio::test]
async fn unknown_employee_clock_in_is_not_found() {
    let (_dir, state) = state_with("admin").await;
    let app = api::router(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/time-entries/clock-in",
            serde_json::json!({ "employee_id": 999999 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn employee_writes_are_guarded_by_permission_name() {
    let (_dir, state) = state_with("employee").await;
    let app = api::router(state);

    // Default employee grants do not include manage_employees
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            serde_json::json!({
                "name": "Nope",
                "email": "nope@example.com",
                "phone": "555-0100",
                "role": "Intern",
                "department_id": null,
                "start_date": "2025-01-01",
                "hourly_rate": 10.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Reading the roster stays open
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/employees")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_bypasses_every_guard_by_construction() {
    let (_dir, state) = state_with("admin").await;
    let app = api::router(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/employees",
            serde_json::json!({
                "name": "Ada Quinn",
                "email": "ada.quinn@example.com",
                "phone": "555-0112",
                "role": "Manager",
                "department_id": null,
                "start_date": "2023-02-01",
                "hourly_rate": 31.5
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
