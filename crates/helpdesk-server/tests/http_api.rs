//! HTTP-level tests for the axum router: status codes and JSON bodies

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use helpdesk_server::routes;
use helpdesk_server::state::AppState;
use helpdesk_store::Store;

fn app() -> Router {
    routes::router().with_state(AppState::new(Arc::new(Store::new())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn create_then_fetch_a_department() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/departments",
        Some(json!({ "name": "Engineering" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Engineering");

    let (status, body) = send(&app, "GET", "/api/departments/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Engineering");
    assert_eq!(body["employees"], json!([]));
}

#[tokio::test]
async fn listing_an_empty_table_is_not_found() {
    let app = app();
    let (status, _) = send(&app, "GET", "/api/departments", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn engine_rejections_are_bad_requests_with_a_json_error() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/departments",
        Some(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required in DepartmentRequest.");
}

#[tokio::test]
async fn restrict_violations_come_back_as_conflicts() {
    let app = app();
    send(
        &app,
        "POST",
        "/api/departments",
        Some(json!({ "name": "Engineering" })),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({
            "name": "Iva Maron",
            "email": "iva.maron@example.com",
            "departmentId": 1
        })),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/api/departments/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("Employee"));

    // the department is still there
    let (status, _) = send(&app, "GET", "/api/departments/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_rows_are_not_found_and_zero_ids_are_rejected() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/tickets/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Ticket with ID 7 not found");

    let (status, body) = send(&app, "GET", "/api/tickets/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Id must be greater than zero.");
}

#[tokio::test]
async fn delete_returns_the_confirmation_message() {
    let app = app();
    send(
        &app,
        "POST",
        "/api/support-agents",
        Some(json!({ "name": "Pavel Rinn", "specialization": "Printers" })),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/api/support-agents/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Support Agent with ID 1 deleted successfully."));
}
