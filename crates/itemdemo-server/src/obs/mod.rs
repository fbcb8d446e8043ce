//! Observability: process-wide logging setup and a lightweight in-process
//! Prometheus registry.
//!
//! Request metrics are collected by the `track_http` middleware and rendered
//! by the `/metrics` handler.

pub mod logging;
pub mod metrics;
pub mod middleware;

pub use metrics::ServiceMetrics;
