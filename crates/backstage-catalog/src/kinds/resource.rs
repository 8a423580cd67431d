//! Resource — infrastructure a system needs to operate (databases, buckets, CDNs).

use serde::{Deserialize, Serialize};

use super::{KindSpec, KIND_RESOURCE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {
    #[serde(rename = "type")]
    pub resource_type: String,

    pub owner: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl KindSpec for ResourceSpec {
    const KIND: &'static str = KIND_RESOURCE;
}
