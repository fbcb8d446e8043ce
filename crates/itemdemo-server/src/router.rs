//! Axum router wiring.
//!
//! Every route registered here, docs included, is wrapped by the metrics
//! middleware. The fallback is not.

use axum::{middleware, routing::get, Router};

use crate::{api, app_state::AppState, docs, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let environment = state.cfg().environment;

    Router::new()
        .route("/", get(api::read_root))
        .route("/items/:item_id", get(api::read_item))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .merge(docs::routes(environment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_http,
        ))
        .fallback(ops::not_found)
        .with_state(state)
}
