//! Interactive API documentation (development only).
//!
//! - `/openapi.json` : OpenAPI 3 document
//! - `/docs`         : Swagger UI (assets bundled by `utoipa-swagger-ui`)
//! - `/redoc`        : ReDoc page with the document embedded

use axum::Router;
use itemdemo_core::protocol::{
    ErrorBody, HealthResponse, HealthStatus, ItemResponse, RootResponse,
};
use itemdemo_core::Environment;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;

pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "itemdemo", description = "Minimal item echo service"),
    paths(crate::api::read_root, crate::api::read_item, crate::ops::health),
    components(schemas(
        RootResponse,
        ItemResponse,
        HealthResponse,
        HealthStatus,
        Environment,
        ErrorBody
    ))
)]
pub struct ApiDoc;

/// Documentation routes for `environment`; empty in production.
pub fn routes(environment: Environment) -> Router<AppState> {
    if !environment.docs_enabled() {
        return Router::new();
    }
    Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
