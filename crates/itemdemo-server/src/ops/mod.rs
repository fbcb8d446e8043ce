//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness plus shutdown state
//! - `/metrics` : Prometheus text format
//! - fallback   : JSON 404 for unmatched paths

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use itemdemo_core::protocol::{HealthResponse, HealthStatus};
use itemdemo_core::ServiceError;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Answers 200 in both states; `status` flips to `shutting down` once a
/// termination signal was received.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service health", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::from_shutdown(state.is_shutting_down()),
        environment: state.cfg().environment,
    })
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render(state.is_shutting_down());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn not_found(uri: Uri) -> ApiError {
    ServiceError::NotFound(uri.path().to_owned()).into()
}
