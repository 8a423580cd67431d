//! System — a collection of components and resources exposing a set of APIs.

use serde::{Deserialize, Serialize};

use super::{KindSpec, KIND_SYSTEM};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSpec {
    pub owner: String,

    /// Entity ref of the domain the system belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl KindSpec for SystemSpec {
    const KIND: &'static str = KIND_SYSTEM;
}
