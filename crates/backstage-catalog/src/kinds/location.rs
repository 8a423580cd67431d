//! Location — a marker that references other places to look for catalog data.
//!
//! Besides the entity spec, this module holds the shapes returned by the
//! `/locations` endpoints, which manage locations outside of the generic
//! entity-by-name addressing.

use serde::{Deserialize, Serialize};

use super::{KindSpec, KIND_LOCATION};
use crate::entity::Entity;

/// Specification of a `Location` entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationSpec {
    /// Location type shared by all targets. Inherited from the reading
    /// location when left out.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,

    /// A single target, absolute or relative to this entity's own location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,

    /// `required` or `optional`: whether a missing target is an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<String>,
}

impl KindSpec for LocationSpec {
    const KIND: &'static str = KIND_LOCATION;
}

/// A registered location, as returned by the `/locations` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationResponse {
    pub id: String,

    #[serde(rename = "type")]
    pub location_type: String,

    pub target: String,
}

/// One element of the `GET /locations` reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationListResponse {
    pub data: LocationResponse,
}

/// Reply to `POST /locations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationCreateResponse {
    pub location: LocationResponse,

    /// Entities discovered at the location.
    #[serde(default)]
    pub entities: Vec<Entity>,

    /// Only set in dry-run mode: whether the location is already registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
}

/// Body of `POST /locations`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LocationCreateRequest<'a> {
    pub target: &'a str,
    #[serde(rename = "type")]
    pub location_type: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_body() {
        let body = LocationCreateRequest {
            target: "https://example.com/catalog-info.yaml",
            location_type: "url",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"target":"https://example.com/catalog-info.yaml","type":"url"}"#
        );
    }

    #[test]
    fn test_create_response_dry_run() {
        let resp: LocationCreateResponse = serde_json::from_value(serde_json::json!({
            "location": { "id": "830d", "type": "url", "target": "https://example.com" },
            "entities": [],
            "exists": true
        }))
        .unwrap();
        assert_eq!(resp.exists, Some(true));
        assert_eq!(resp.location.location_type, "url");
    }
}
