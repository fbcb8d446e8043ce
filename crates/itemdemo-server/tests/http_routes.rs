#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use itemdemo_core::Environment;
use itemdemo_server::{app_state::AppState, config::ServiceConfig, router};

fn app(environment: Environment) -> (AppState, Router) {
    let state = AppState::new(ServiceConfig {
        environment,
        ..ServiceConfig::default()
    });
    let app = router::build_router(state.clone());
    (state, app)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn root_greets_with_environment() {
    let (_, app) = app(Environment::Production);
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Hello": "World", "environment": "production"}));
}

#[tokio::test]
async fn item_id_is_echoed() {
    let (_, app) = app(Environment::Development);
    for n in [0_i64, 1, 42, -17, i64::MAX, i64::MIN] {
        let (status, body) = get_json(&app, &format!("/items/{n}")).await;
        assert_eq!(status, StatusCode::OK, "n={n}");
        assert_eq!(body["item_id"], json!(n));
        assert_eq!(body["q"], Value::Null);
        assert_eq!(body["environment"], "development");
    }
}

#[tokio::test]
async fn query_text_is_echoed_verbatim() {
    let (_, app) = app(Environment::Development);

    let (_, body) = get_json(&app, "/items/5?q=hello%20world").await;
    assert_eq!(body["q"], "hello world");

    let (_, body) = get_json(&app, "/items/5?q=").await;
    assert_eq!(body["q"], "");

    let (_, body) = get_json(&app, "/items/5").await;
    assert_eq!(body["q"], Value::Null);

    let (status, body) = get_json(&app, "/items/5?q=a&q=b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["q"], "b");

    let (status, body) = get_json(&app, "/items/5?other=1&q=x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["q"], "x");
}

#[tokio::test]
async fn non_integer_item_id_is_rejected() {
    let (_, app) = app(Environment::Development);
    for bad in ["abc", "1.5", "1e3"] {
        let (status, body) = get_json(&app, &format!("/items/{bad}")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "id={bad}");
        assert_eq!(body["error"], "VALIDATION_FAILED");
    }
}

#[tokio::test]
async fn item_id_is_bounded_to_i64() {
    let (_, app) = app(Environment::Development);

    let (status, body) = get_json(&app, "/items/9223372036854775807").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item_id"], json!(i64::MAX));

    for beyond in ["9223372036854775808", "-9223372036854775809", "99999999999999999999"] {
        let (status, body) = get_json(&app, &format!("/items/{beyond}")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "id={beyond}");
        assert_eq!(body["error"], "VALIDATION_FAILED");
    }
}

#[tokio::test]
async fn health_reports_shutdown_transition() {
    let (state, app) = app(Environment::Development);

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "environment": "development"}));

    state.shutdown_flag().trigger();

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "shutting down");

    // one-way
    state.shutdown_flag().trigger();
    let (_, body) = get_json(&app, "/health").await;
    assert_eq!(body["status"], "shutting down");
}

#[tokio::test]
async fn docs_only_in_development() {
    let (_, dev) = app(Environment::Development);

    // Swagger UI answers the bare path with a redirect to `/docs/`.
    let (status, _) = get(&dev, "/docs").await;
    assert!(status.is_success() || status.is_redirection(), "status={status}");

    let (status, page) = get(&dev, "/docs/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&page).to_lowercase().contains("swagger"));

    let (status, page) = get(&dev, "/redoc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&page).to_lowercase().contains("redoc"));

    let (status, doc) = get_json(&dev, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/items/{item_id}").is_some());

    let (_, prod) = app(Environment::Production);
    for uri in ["/docs", "/docs/", "/redoc", "/openapi.json"] {
        let (status, _) = get(&prod, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri={uri}");
    }
}

#[tokio::test]
async fn metrics_count_prior_requests() {
    let (state, app) = app(Environment::Development);

    get(&app, "/").await;
    get(&app, "/items/7?q=x").await;
    get(&app, "/items/abc").await;

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(ct.to_str().unwrap().starts_with("text/plain"));

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(!text.is_empty());
    assert!(text.contains(r#"http_requests_total{handler="/",method="GET",status="2xx"} 1"#));
    assert!(text.contains(r#"http_requests_total{handler="/items/:item_id",method="GET",status="2xx"} 1"#));
    assert!(text.contains(r#"http_requests_total{handler="/items/:item_id",method="GET",status="4xx"} 1"#));
    assert!(text.contains("service_shutting_down 0"));

    let m = state.metrics();
    assert_eq!(m.request_duration.count(&[("method", "GET"), ("handler", "/items/:item_id")]), 2);
    assert_eq!(m.requests_inprogress.get(&[("method", "GET"), ("handler", "/")]), 0);
}

#[tokio::test]
async fn unmatched_routes_are_not_instrumented() {
    let (state, app) = app(Environment::Development);
    let (status, body) = get_json(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert!(!state.metrics().render(false).contains("/nope"));
}
