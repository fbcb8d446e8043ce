//! Process-wide logging setup.
//!
//! Lines go to stdout with timestamp, target, level, the enclosing handler
//! span, message and fields. Production adds source file and line number and
//! drops ANSI colouring.

use itemdemo_core::{Result, ServiceError};
use tracing::Subscriber;
use tracing_subscriber::{fmt, fmt::MakeWriter, EnvFilter};

use crate::config::ServiceConfig;

/// Filter admitting the configured level and everything more severe.
pub fn filter_for(cfg: &ServiceConfig) -> EnvFilter {
    EnvFilter::new(cfg.log_level.as_str())
}

/// Build the subscriber for `cfg`, writing to `writer`.
pub fn subscriber<W>(cfg: &ServiceConfig, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let production = cfg.environment.is_production();
    fmt()
        .with_writer(writer)
        .with_env_filter(filter_for(cfg))
        .with_target(true)
        .with_level(true)
        .with_file(production)
        .with_line_number(production)
        .with_ansi(!production)
        .finish()
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(cfg: &ServiceConfig) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(cfg, std::io::stdout))
        .map_err(|e| ServiceError::Internal(format!("logger init failed: {e}")))
}
