//! itemdemo core: transport-agnostic wire models, error types, and the
//! deployment environment.
//!
//! This crate defines the JSON contracts and error surface shared by the
//! server, its tests, and any client tooling. It carries no transport or
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ServiceError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod environment;
pub mod error;
pub mod protocol;

pub use environment::Environment;
/// Shared result type.
pub use error::{Result, ServiceError};
