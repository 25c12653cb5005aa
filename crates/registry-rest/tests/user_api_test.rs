//! End-to-end tests for the `/users` API over an in-memory store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use registry_config::ServerConfig;
use registry_core::{AgePolicy, FixedClock};
use registry_repository::{InMemoryUserStore, UserRepositoryImpl};
use registry_rest::{build_router, AppState};
use registry_service::UserServiceImpl;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    store: Arc<InMemoryUserStore>,
}

impl TestApp {
    fn new() -> Self {
        Self::with_today(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    fn with_today(today: NaiveDate) -> Self {
        let store = Arc::new(InMemoryUserStore::new());
        let repository = Arc::new(UserRepositoryImpl::new(store.clone()));
        let service = Arc::new(UserServiceImpl::new(
            repository,
            Arc::new(FixedClock(today)),
            AgePolicy::DayOfYear,
        ));
        let router = build_router(AppState::new(service), &ServerConfig::default());
        Self { router, store }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(body) => {
                builder = builder.header("content-type", "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(&self, name: &str, dob: &str) -> Value {
        let body = json!({ "name": name, "dob": dob }).to_string();
        let (status, value) = self.send("POST", "/users", Some(&body)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {value}");
        value
    }
}

#[tokio::test]
async fn test_create_user_returns_created() {
    let app = TestApp::new();

    let (status, body) = app
        .send("POST", "/users", Some(r#"{"name":"Ann","dob":"1990-05-02"}"#))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "name": "Ann", "dob": "1990-05-02" }));
}

#[tokio::test]
async fn test_get_user_includes_age() {
    let app = TestApp::new();
    app.create("Ann", "1990-05-02").await;

    let (status, body) = app.send("GET", "/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Ann", "dob": "1990-05-02", "age": 36 })
    );
}

#[tokio::test]
async fn test_get_user_age_before_birthday() {
    let app = TestApp::with_today(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    app.create("Ann", "1990-05-02").await;

    let (_, body) = app.send("GET", "/users/1", None).await;
    assert_eq!(body["age"], 35);
}

#[tokio::test]
async fn test_update_with_short_name_is_rejected() {
    let app = TestApp::new();
    app.create("Ann", "1990-05-02").await;

    let (status, body) = app
        .send("PUT", "/users/1", Some(r#"{"name":"A","dob":"1990-05-02"}"#))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name: name must be between 2 and 50 characters");
    assert_eq!(body["details"][0]["field"], "name");

    let (_, fetched) = app.send("GET", "/users/1", None).await;
    assert_eq!(fetched["name"], "Ann");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = TestApp::new();
    app.create("Ann", "1990-05-02").await;

    let (status, body) = app.send("DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = app.send("GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_create_with_invalid_date_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send("POST", "/users", Some(r#"{"name":"Bo","dob":"not-a-date"}"#))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "dob: dob must be formatted as YYYY-MM-DD");
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_with_impossible_date_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send("POST", "/users", Some(r#"{"name":"Bo","dob":"1990-02-30"}"#))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["code"], "date_range");
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/users/9999999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_name_length_bounds() {
    let app = TestApp::new();

    for name in [String::new(), "A".to_string(), "A".repeat(51)] {
        let body = json!({ "name": name, "dob": "1990-05-02" }).to_string();
        let (status, _) = app.send("POST", "/users", Some(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "name of {} chars", name.len());
    }
    assert!(app.store.is_empty());

    app.create(&"A".repeat(50), "1990-05-02").await;
    app.create("Al", "1990-05-02").await;
    assert_eq!(app.store.len(), 2);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_request() {
    let app = TestApp::new();

    for body in ["{not json", r#"{"name": 5, "dob": "1990-05-02"}"#, r#""Ann""#] {
        let (status, value) = app.send("POST", "/users", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(value, json!({ "error": "invalid request" }));
    }
}

#[tokio::test]
async fn test_missing_content_type_is_invalid_request() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .body(Body::from(r#"{"name":"Ann","dob":"1990-05-02"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_fields_fail_validation() {
    let app = TestApp::new();

    let (status, body) = app.send("POST", "/users", Some(r#"{"name":"Ann"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "dob: dob is required");
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let app = TestApp::new();
    let invalid = json!({ "error": "invalid user ID" });

    let (status, body) = app.send("GET", "/users/abc", None).await;
    assert_eq!((status, body), (StatusCode::BAD_REQUEST, invalid.clone()));

    let (status, body) = app.send("DELETE", "/users/1.5", None).await;
    assert_eq!((status, body), (StatusCode::BAD_REQUEST, invalid.clone()));

    // The id is rejected even when the body is also bad.
    let (status, body) = app.send("PUT", "/users/abc", Some("{not json")).await;
    assert_eq!((status, body), (StatusCode::BAD_REQUEST, invalid));
}

#[tokio::test]
async fn test_update_user() {
    let app = TestApp::new();
    app.create("Ann", "1990-05-02").await;

    let (status, body) = app
        .send("PUT", "/users/1", Some(r#"{"name":"Anna","dob":"1991-06-03"}"#))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Anna", "dob": "1991-06-03" }));

    let (_, fetched) = app.send("GET", "/users/1", None).await;
    assert_eq!(fetched["dob"], "1991-06-03");
    assert_eq!(fetched["age"], 35);
}

#[tokio::test]
async fn test_update_unknown_user_is_server_error() {
    let app = TestApp::new();

    let (status, body) = app
        .send("PUT", "/users/42", Some(r#"{"name":"Anna","dob":"1991-06-03"}"#))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Resource not found: User with id 42");
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_user_is_server_error() {
    let app = TestApp::new();
    app.create("Ann", "1990-05-02").await;

    let (status, _) = app.send("DELETE", "/users/42", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    app.create("Ann", "1990-05-02").await;
    app.create("Bo", "2000-12-31").await;

    let (status, body) = app.send("GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Ann", "dob": "1990-05-02", "age": 36 },
            { "id": 2, "name": "Bo", "dob": "2000-12-31", "age": 25 }
        ])
    );
}

#[tokio::test]
async fn test_store_failures() {
    let app = TestApp::new();
    app.create("Ann", "1990-05-02").await;
    app.store.set_failing(true);

    let (status, body) = app.send("GET", "/users", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error: store unavailable");

    let (status, _) = app
        .send("POST", "/users", Some(r#"{"name":"Bo","dob":"1990-05-02"}"#))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // Reads by id report every failure as not found.
    let (status, body) = app.send("GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "ok", "message": "Server is running smoothly" })
    );
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/{id}"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let (status, _) = app.send("GET", "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_is_not_routed() {
    let app = TestApp::new();
    app.create("Ann", "1990-05-02").await;

    let (status, _) = app.send("GET", "/users/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send("POST", "/users/", Some(r#"{"name":"Bo","dob":"1990-05-02"}"#))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.len(), 1);

    let (status, _) = app.send("GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
}
