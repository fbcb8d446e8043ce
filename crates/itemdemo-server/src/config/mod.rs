//! Service config loader (lenient, environment-driven).
//!
//! Every setting has a default and unrecognized values fall back to it
//! silently; resolving a config never fails.

pub mod schema;

use std::net::SocketAddr;
use std::time::Duration;

use itemdemo_core::Environment;

pub use schema::{LogLevel, ServiceConfig};

pub const ENV_VAR: &str = "ENV";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const SHUTDOWN_GRACE_VAR: &str = "SHUTDOWN_GRACE_SECS";

/// Resolve from the process environment.
pub fn from_env() -> ServiceConfig {
    from_lookup(|key| std::env::var(key).ok())
}

/// Resolve from an arbitrary key lookup.
pub fn from_lookup<F>(lookup: F) -> ServiceConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ServiceConfig::default();

    let environment = lookup(ENV_VAR)
        .map(|v| Environment::parse_lenient(&v))
        .unwrap_or(defaults.environment);

    let log_level = lookup(LOG_LEVEL_VAR)
        .map(|v| LogLevel::parse_lenient(&v))
        .unwrap_or(defaults.log_level);

    let listen = lookup(BIND_ADDR_VAR)
        .and_then(|v| v.trim().parse::<SocketAddr>().ok())
        .unwrap_or(defaults.listen);

    let shutdown_grace = lookup(SHUTDOWN_GRACE_VAR)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(defaults.shutdown_grace);

    ServiceConfig {
        environment,
        log_level,
        listen,
        shutdown_grace,
    }
}
