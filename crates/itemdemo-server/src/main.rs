//! itemdemo server
//!
//! - `GET /`, `GET /items/:item_id` : JSON echo endpoints
//! - `GET /health`, `GET /metrics`  : operational endpoints
//! - `/docs`, `/redoc`, `/openapi.json` outside production
//! - SIGINT/SIGTERM: flag shutdown, drain for `SHUTDOWN_GRACE_SECS`, exit 0

use std::process::ExitCode;

use itemdemo_server::{config, lifecycle, obs};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = config::from_env();

    if let Err(e) = obs::logging::init(&cfg) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match lifecycle::run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "service failed");
            ExitCode::FAILURE
        }
    }
}
