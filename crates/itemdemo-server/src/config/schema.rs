use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use itemdemo_core::Environment;

/// Immutable settings resolved once at startup and handed to each component
/// that needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub environment: Environment,
    pub log_level: LogLevel,
    pub listen: SocketAddr,
    /// Drain window after a termination signal. Zero abandons in-flight
    /// requests immediately.
    pub shutdown_grace: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            listen: default_listen(),
            shutdown_grace: default_shutdown_grace(),
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000))
}
fn default_shutdown_grace() -> Duration {
    Duration::from_secs(10)
}

/// Minimum severity written by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Case-insensitive; `warning`, `critical` and `fatal` are accepted as
    /// aliases. Anything unrecognized resolves to `Info`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" | "critical" | "fatal" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
