//! End-to-end smoke tests for the full havend stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! store, real security service, real axum router) with a stubbed classifier
//! and exercises the HTTP layer via `tower::ServiceExt::oneshot` — no TCP
//! port is bound and no classification service is reached.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use haven_adapter_http_axum::router;
use haven_adapter_http_axum::state::AppState;
use haven_adapter_storage_sqlite_sqlx::{Config, SqliteStateStore};
use haven_app::ports::CatClassifier;
use haven_app::services::security_service::SecurityService;
use haven_domain::error::HavenError;
use haven_domain::image::CameraImage;
use tower::ServiceExt;

/// Classifier stub with a fixed verdict.
struct StubClassifier {
    answer: bool,
}

impl CatClassifier for StubClassifier {
    async fn contains_cat(
        &self,
        _image: &CameraImage,
        _confidence_threshold: f32,
    ) -> Result<bool, HavenError> {
        Ok(self.answer)
    }
}

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app(cat_answer: bool) -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let store = SqliteStateStore::new(db.pool().clone());
    let service = SecurityService::new(store, StubClassifier { answer: cat_answer });

    router::build(AppState::new(service))
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn put_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app(false).await.oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// System status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_start_quiet_and_disarmed() {
    let resp = app(false).await.oneshot(get("/api/status")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["alarm_status"], "no_alarm");
    assert_eq!(body["arming_status"], "disarmed");
}

#[tokio::test]
async fn should_change_arming_status_via_api() {
    let app = app(false).await;

    let resp = app
        .clone()
        .oneshot(put_json(
            "/api/status/arming",
            r#"{"arming_status":"armed_away"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["arming_status"], "armed_away");
    assert_eq!(body["alarm_status"], "no_alarm");
}

// ---------------------------------------------------------------------------
// Sensors: full lifecycle through the state machine
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_sensor_crud_cycle() {
    let app = app(false).await;

    // Create sensor
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/sensors",
            r#"{"name":"Front Door","kind":"door"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    let sensor_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["name"], "Front Door");
    assert_eq!(body["active"], false);

    // List sensors
    let resp = app.clone().oneshot(get("/api/sensors")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Delete sensor
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/sensors/{sensor_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Verify gone
    let resp = app.oneshot(get("/api/sensors")).await.unwrap();
    let body = json_body(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_reject_sensor_with_empty_name() {
    let resp = app(false)
        .await
        .oneshot(post_json("/api/sensors", r#"{"name":"","kind":"motion"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_escalate_alarm_as_armed_sensors_activate() {
    let app = app(false).await;

    // Two sensors so the all-active override stays out of the way.
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/sensors",
            r#"{"name":"Front Door","kind":"door"}"#,
        ))
        .await
        .unwrap();
    let first_id = json_body(resp).await["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/sensors",
            r#"{"name":"Hallway Motion","kind":"motion"}"#,
        ))
        .await
        .unwrap();
    let second_id = json_body(resp).await["id"].as_str().unwrap().to_string();

    // Arm away
    app.clone()
        .oneshot(put_json(
            "/api/status/arming",
            r#"{"arming_status":"armed_away"}"#,
        ))
        .await
        .unwrap();

    // First activation: quiet -> pending
    let resp = app
        .clone()
        .oneshot(put_json(
            &format!("/api/sensors/{first_id}/active"),
            r#"{"active":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.clone().oneshot(get("/api/status")).await.unwrap();
    assert_eq!(json_body(resp).await["alarm_status"], "pending_alarm");

    // Second activation: pending -> alarm
    app.clone()
        .oneshot(put_json(
            &format!("/api/sensors/{second_id}/active"),
            r#"{"active":true}"#,
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get("/api/status")).await.unwrap();
    assert_eq!(json_body(resp).await["alarm_status"], "alarm");
}

#[tokio::test]
async fn should_quiet_pending_alarm_when_sensor_deactivates() {
    let app = app(false).await;

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/sensors",
            r#"{"name":"Front Door","kind":"door"}"#,
        ))
        .await
        .unwrap();
    let first_id = json_body(resp).await["id"].as_str().unwrap().to_string();

    app.clone()
        .oneshot(post_json(
            "/api/sensors",
            r#"{"name":"Back Door","kind":"door"}"#,
        ))
        .await
        .unwrap();

    app.clone()
        .oneshot(put_json(
            "/api/status/arming",
            r#"{"arming_status":"armed_home"}"#,
        ))
        .await
        .unwrap();

    app.clone()
        .oneshot(put_json(
            &format!("/api/sensors/{first_id}/active"),
            r#"{"active":true}"#,
        ))
        .await
        .unwrap();

    app.clone()
        .oneshot(put_json(
            &format!("/api/sensors/{first_id}/active"),
            r#"{"active":false}"#,
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get("/api/status")).await.unwrap();
    assert_eq!(json_body(resp).await["alarm_status"], "no_alarm");
}

#[tokio::test]
async fn should_mark_all_sensors_active_when_disarmed() {
    let app = app(false).await;

    app.clone()
        .oneshot(post_json(
            "/api/sensors",
            r#"{"name":"Front Door","kind":"door"}"#,
        ))
        .await
        .unwrap();

    app.clone()
        .oneshot(put_json(
            "/api/status/arming",
            r#"{"arming_status":"disarmed"}"#,
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get("/api/sensors")).await.unwrap();
    let body = json_body(resp).await;
    assert!(body.as_array().unwrap().iter().all(|s| s["active"] == true));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_sensor() {
    let resp = app(false)
        .await
        .oneshot(put_json(
            "/api/sensors/00000000-0000-0000-0000-000000000000/active",
            r#"{"active":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Camera frames
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_trip_alarm_when_cat_detected_while_armed_home() {
    let app = app(true).await;

    app.clone()
        .oneshot(put_json(
            "/api/status/arming",
            r#"{"arming_status":"armed_home"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/camera/image")
                .header("content-type", "application/octet-stream")
                .body(Body::from(vec![0u8; 32]))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.oneshot(get("/api/status")).await.unwrap();
    assert_eq!(json_body(resp).await["alarm_status"], "alarm");
}

#[tokio::test]
async fn should_stay_quiet_when_no_cat_detected() {
    let app = app(false).await;

    app.clone()
        .oneshot(put_json(
            "/api/status/arming",
            r#"{"arming_status":"armed_home"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/camera/image")
                .header("content-type", "application/octet-stream")
                .body(Body::from(vec![0u8; 32]))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.oneshot(get("/api/status")).await.unwrap();
    assert_eq!(json_body(resp).await["alarm_status"], "no_alarm");
}
