//! Request instrumentation middleware.
//!
//! Installed with `route_layer`, so only requests that matched a route are
//! counted and the `handler` label is always a route template.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::obs::metrics::duration_micros;

fn status_class(status: StatusCode) -> String {
    format!("{}xx", status.as_u16() / 100)
}

pub async fn track_http(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let handler = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "none".to_owned());

    let metrics = state.metrics();
    let labels = [("method", method.as_str()), ("handler", handler.as_str())];

    metrics.requests_inprogress.inc(&labels);
    let resp = next.run(req).await;
    metrics.requests_inprogress.dec(&labels);

    let elapsed = start.elapsed();
    let status = status_class(resp.status());
    metrics.requests_total.inc(&[
        ("method", method.as_str()),
        ("handler", handler.as_str()),
        ("status", status.as_str()),
    ]);
    metrics.request_duration.observe(&labels, elapsed);

    tracing::debug!(
        %method,
        %handler,
        status = resp.status().as_u16(),
        elapsed_us = duration_micros(elapsed),
        "request completed"
    );
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_grouped_by_class() {
        assert_eq!(status_class(StatusCode::OK), "2xx");
        assert_eq!(status_class(StatusCode::UNPROCESSABLE_ENTITY), "4xx");
        assert_eq!(status_class(StatusCode::INTERNAL_SERVER_ERROR), "5xx");
    }
}
