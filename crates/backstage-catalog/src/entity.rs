//! Entity — the envelope shared by every item tracked in the catalog.
//!
//! Two shapes are provided:
//!
//! - [`Entity`] keeps `spec` as a free-form JSON object. It is what the
//!   untyped list/get-by-UID endpoints return, when the kind is not known
//!   ahead of time.
//! - [`TypedEntity<S>`] swaps the free-form `spec` for a strongly-typed one
//!   (see [`crate::kinds`]), used when the caller already knows the kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The parts of the format that are common to all versions/kinds of entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Version of the specification format this entity is written against.
    #[serde(default)]
    pub api_version: String,

    /// High level entity type being described.
    #[serde(default)]
    pub kind: String,

    /// Identity and labeling block.
    #[serde(default)]
    pub metadata: EntityMeta,

    /// Specification data describing the entity itself, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub spec: Map<String, Value>,

    /// Relations this entity has with other entities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<EntityRelation>,

    /// Current status of the entity, as claimed by various sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

impl Entity {
    /// Render the `kind:namespace/name` reference of this entity.
    pub fn entity_ref(&self) -> String {
        self.metadata.entity_ref(&self.kind)
    }
}

/// An entity whose `spec` is decoded into a kind-specific structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedEntity<S> {
    /// Always `backstage.io/v1alpha1` for the built-in kinds.
    #[serde(default)]
    pub api_version: String,

    /// The kind name, e.g. `Component`.
    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub metadata: EntityMeta,

    /// Kind-specific specification.
    pub spec: S,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<EntityRelation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

impl<S> TypedEntity<S> {
    /// Render the `kind:namespace/name` reference of this entity.
    pub fn entity_ref(&self) -> String {
        self.metadata.entity_ref(&self.kind)
    }
}

/// Metadata fields common to all versions/kinds of entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    /// Globally unique ID, assigned by the server and populated in read operations.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,

    /// Opaque token that changes on every update to the entity.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,

    /// Unique within the catalog for any given namespace + kind pair.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Display name, shown in user interfaces instead of `name` when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Identifying key/value pairs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Non-identifying auxiliary key/value pairs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// External hyperlinks related to the entity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<EntityLink>,
}

impl EntityMeta {
    /// Render `kind:namespace/name`, lowercasing the kind and falling back to
    /// the `default` namespace when none is set.
    pub fn entity_ref(&self, kind: &str) -> String {
        let namespace = if self.namespace.is_empty() {
            crate::client::DEFAULT_NAMESPACE
        } else {
            &self.namespace
        };
        format!("{}:{}/{}", kind.to_lowercase(), namespace, self.name)
    }
}

/// A link to external information related to the entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityLink {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Key of a visual icon to display in the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Optional category for grouping links.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

/// A directed relation from one entity to another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRelation {
    /// Relation type, e.g. `ownedBy` or `dependsOn`.
    #[serde(default, rename = "type")]
    pub relation_type: String,

    /// Entity ref of the relation target.
    #[serde(default)]
    pub target_ref: String,

    /// Resolved target descriptor, present on older catalog backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<EntityRelationTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRelationTarget {
    pub name: String,
    pub kind: String,
    pub namespace: String,
}

/// Status of the entity, as claimed by various sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<EntityStatusItem>,
}

/// A single status item in a well-known format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityStatusItem {
    #[serde(rename = "type")]
    pub item_type: String,

    /// One of `info`, `warning` or `error`.
    pub level: String,

    /// Human readable description of the status.
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<EntityStatusItemError>,
}

/// A serialized error attached to a status item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityStatusItemError {
    pub name: String,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}
