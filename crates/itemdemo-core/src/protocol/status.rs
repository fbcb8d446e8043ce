use serde::Serialize;
use utoipa::ToSchema;

use crate::environment::Environment;
use crate::error::ServiceError;

/// Liveness as seen by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum HealthStatus {
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "shutting down")]
    ShuttingDown,
}

impl HealthStatus {
    pub fn from_shutdown(shutting_down: bool) -> Self {
        if shutting_down {
            HealthStatus::ShuttingDown
        } else {
            HealthStatus::Healthy
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub environment: Environment,
}

/// JSON body for client-facing errors.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl From<&ServiceError> for ErrorBody {
    fn from(e: &ServiceError) -> Self {
        Self {
            error: e.client_code().as_str().to_string(),
            message: e.to_string(),
        }
    }
}
