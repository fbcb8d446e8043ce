//! Shared application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::lifecycle::ShutdownFlag;
use crate::obs::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    metrics: ServiceMetrics,
    shutdown: ShutdownFlag,
}

impl AppState {
    pub fn new(cfg: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServiceMetrics::default(),
                shutdown: ShutdownFlag::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn shutdown_flag(&self) -> &ShutdownFlag {
        &self.inner.shutdown
    }

    pub fn is_shutting_down(&self) -> bool {
        self.inner.shutdown.is_set()
    }
}
