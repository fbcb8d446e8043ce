//! Service lifecycle: startup/shutdown hooks, termination signals, and the
//! bounded drain.
//!
//! The signal path only flips the [`ShutdownFlag`] and wakes the supervisor.
//! The server stops accepting connections and drains; the supervisor abandons
//! whatever is still in flight once the grace period elapses.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use itemdemo_core::{Result, ServiceError};
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::app_state::AppState;
use crate::config::ServiceConfig;
use crate::router;

/// One-way "termination has begun" marker shared by every handler.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    /// Set the flag. Returns true only for the call that flipped it.
    pub fn trigger(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Interrupt,
    Terminate,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Signal::Interrupt => "SIGINT",
            Signal::Terminate => "SIGTERM",
        })
    }
}

/// Resolve on the first SIGINT or SIGTERM (Ctrl+C only on non-unix).
///
/// A handler that cannot be installed is logged and its branch never fires.
pub async fn wait_for_signal() -> Signal {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => Signal::Interrupt,
        _ = terminate => Signal::Terminate,
    }
}

pub fn on_startup(cfg: &ServiceConfig) {
    tracing::info!(
        environment = %cfg.environment,
        log_level = %cfg.log_level,
        listen = %cfg.listen,
        "service starting"
    );
}

pub fn on_shutdown(cfg: &ServiceConfig) {
    tracing::info!(environment = %cfg.environment, "service stopped");
}

/// Serve `app` on `listener` until `signal` resolves, then drain for at most
/// `grace`.
pub async fn serve<S>(
    listener: TcpListener,
    app: Router,
    flag: ShutdownFlag,
    grace: Duration,
    signal: S,
) -> Result<()>
where
    S: Future<Output = Signal> + Send + 'static,
{
    let draining = Arc::new(Notify::new());

    let trigger = {
        let draining = Arc::clone(&draining);
        async move {
            let sig = signal.await;
            tracing::info!(signal = %sig, "termination signal received, shutting down");
            flag.trigger();
            // Stores a permit, so the supervisor sees it even if not yet waiting.
            draining.notify_one();
        }
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(trigger)
        .into_future();

    let deadline = async {
        draining.notified().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        res = server => res.map_err(|e| ServiceError::Internal(format!("server failed: {e}")))?,
        _ = deadline => {
            tracing::warn!(grace_secs = grace.as_secs(), "drain window elapsed, abandoning in-flight requests");
        }
    }
    Ok(())
}

/// Bind, run the startup hook, serve until a termination signal, run the
/// shutdown hook.
pub async fn run(cfg: ServiceConfig) -> Result<()> {
    let listen = cfg.listen;
    let grace = cfg.shutdown_grace;

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = TcpListener::bind(listen).await.map_err(|source| ServiceError::Bind {
        addr: listen.to_string(),
        source,
    })?;

    on_startup(state.cfg());
    serve(listener, app, state.shutdown_flag().clone(), grace, wait_for_signal()).await?;
    on_shutdown(state.cfg());
    Ok(())
}
