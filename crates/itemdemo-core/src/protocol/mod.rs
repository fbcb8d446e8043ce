//! JSON wire contracts.
//!
//! - `RootResponse`   : `GET /`
//! - `ItemResponse`   : `GET /items/{item_id}`
//! - `HealthResponse` : `GET /health`
//! - `ErrorBody`      : any client error

pub mod item;
pub mod status;

pub use item::{ItemQuery, ItemResponse, RootResponse};
pub use status::{ErrorBody, HealthResponse, HealthStatus};
