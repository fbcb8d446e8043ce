//! itemdemo server library entry.
//!
//! Wires configuration, logging, metrics, the HTTP routes and the shutdown
//! lifecycle into one service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod docs;
pub mod error;
pub mod lifecycle;
pub mod obs;
pub mod ops;
pub mod router;
