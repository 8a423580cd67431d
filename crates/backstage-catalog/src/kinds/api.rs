//! API — an interface a component exposes (OpenAPI, AsyncAPI, GraphQL, gRPC, ...).

use serde::{Deserialize, Serialize};

use super::{KindSpec, KIND_API};

/// Specification of an `API` entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSpec {
    /// Format of the definition, e.g. `openapi`.
    #[serde(rename = "type")]
    pub api_type: String,

    pub lifecycle: String,

    pub owner: String,

    /// The API definition itself, in the format given by `type`.
    pub definition: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl KindSpec for ApiSpec {
    const KIND: &'static str = KIND_API;
}
