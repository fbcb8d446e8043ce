use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::environment::Environment;

/// Greeting returned by the root route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RootResponse {
    #[serde(rename = "Hello")]
    pub hello: String,
    pub environment: Environment,
}

impl RootResponse {
    pub fn new(environment: Environment) -> Self {
        Self {
            hello: "World".to_string(),
            environment,
        }
    }
}

/// Optional query string of `GET /items/{item_id}`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Free-form text echoed back verbatim.
    #[serde(default)]
    pub q: Option<String>,
}

impl ItemQuery {
    /// Build from decoded query pairs. A repeated `q` keeps the last value;
    /// unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let q = pairs
            .into_iter()
            .filter(|(k, _)| k == "q")
            .map(|(_, v)| v)
            .last();
        Self { q }
    }
}

/// Echo of the requested item. `q` serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ItemResponse {
    pub item_id: i64,
    pub q: Option<String>,
    pub environment: Environment,
}

impl ItemResponse {
    pub fn new(item_id: i64, q: Option<String>, environment: Environment) -> Self {
        Self { item_id, q, environment }
    }
}
