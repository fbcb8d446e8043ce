//! Data endpoints.
//!
//! - `GET /`                 : static greeting
//! - `GET /items/:item_id`   : echo of the path id and optional `q`

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use itemdemo_core::protocol::{ItemQuery, ItemResponse, RootResponse};

use crate::app_state::AppState;
use crate::error::ApiError;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = RootResponse))
)]
#[tracing::instrument(name = "read_root", skip_all)]
pub async fn read_root(State(state): State<AppState>) -> Json<RootResponse> {
    tracing::info!("root endpoint accessed");
    Json(RootResponse::new(state.cfg().environment))
}

/// `item_id` must parse as `i64` (-9223372036854775808..=9223372036854775807);
/// anything else, including larger integers, is a 422. A repeated `q` echoes
/// the last value.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Item identifier"),
        ItemQuery
    ),
    responses(
        (status = 200, description = "Item echo", body = ItemResponse),
        (status = 422, description = "item_id is not an integer", body = itemdemo_core::protocol::ErrorBody)
    )
)]
#[tracing::instrument(name = "read_item", skip_all)]
pub async fn read_item(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Path(item_id) = item_id?;
    let Query(pairs) = query?;
    let ItemQuery { q } = ItemQuery::from_pairs(pairs);

    tracing::info!(item_id, q = ?q, "item endpoint accessed");
    Ok(Json(ItemResponse::new(item_id, q, state.cfg().environment)))
}
