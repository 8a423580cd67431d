//! Kinds — strongly-typed specifications of the built-in catalog kinds.
//!
//! Every kind is described by a spec struct implementing [`KindSpec`]. The
//! trait ties the struct to the kind name used in by-name lookups, which is
//! what lets a single generic [`KindService`](crate::catalog::KindService)
//! serve all of them.

pub mod api;
pub mod component;
pub mod domain;
pub mod group;
pub mod location;
pub mod resource;
pub mod system;
pub mod user;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::entity::TypedEntity;

pub use api::ApiSpec;
pub use component::ComponentSpec;
pub use domain::DomainSpec;
pub use group::GroupSpec;
pub use location::{LocationCreateResponse, LocationListResponse, LocationResponse, LocationSpec};
pub use resource::ResourceSpec;
pub use system::SystemSpec;
pub use user::UserSpec;

/// API version shared by all built-in kinds.
pub const API_VERSION_V1ALPHA1: &str = "backstage.io/v1alpha1";

pub const KIND_API: &str = "API";
pub const KIND_COMPONENT: &str = "Component";
pub const KIND_DOMAIN: &str = "Domain";
pub const KIND_GROUP: &str = "Group";
pub const KIND_LOCATION: &str = "Location";
pub const KIND_RESOURCE: &str = "Resource";
pub const KIND_SYSTEM: &str = "System";
pub const KIND_USER: &str = "User";

/// A kind-specific `spec` payload.
pub trait KindSpec: DeserializeOwned + Send + Sync + 'static {
    /// Kind name as it appears in the entity's `kind` field.
    const KIND: &'static str;
}

pub type ApiEntityV1alpha1 = TypedEntity<ApiSpec>;
pub type ComponentEntityV1alpha1 = TypedEntity<ComponentSpec>;
pub type DomainEntityV1alpha1 = TypedEntity<DomainSpec>;
pub type GroupEntityV1alpha1 = TypedEntity<GroupSpec>;
pub type LocationEntityV1alpha1 = TypedEntity<LocationSpec>;
pub type ResourceEntityV1alpha1 = TypedEntity<ResourceSpec>;
pub type SystemEntityV1alpha1 = TypedEntity<SystemSpec>;
pub type UserEntityV1alpha1 = TypedEntity<UserSpec>;

/// Display information about a user or group. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Address where the user or group can be reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// URL of an image that represents the user or group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Every built-in kind name, in the order the catalog documents them.
pub const ALL_KINDS: [&str; 8] = [
    KIND_COMPONENT,
    KIND_API,
    KIND_SYSTEM,
    KIND_DOMAIN,
    KIND_RESOURCE,
    KIND_GROUP,
    KIND_USER,
    KIND_LOCATION,
];
