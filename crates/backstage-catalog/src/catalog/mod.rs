//! Catalog — the services of the Backstage Software Catalog API.
//!
//! [`CatalogService`] groups one service per kind plus the untyped
//! [`EntityService`]. Kind services are thin aliases of [`KindService`], so
//! the by-name URL construction and namespace defaulting live in one place.

pub mod entity;
pub mod kind;
pub mod location;

use std::sync::Arc;

use crate::transport::Transport;

pub use entity::{EntityService, ListEntityOptions, ListEntityOrder, ORDER_ASCENDING, ORDER_DESCENDING};
pub use kind::{
    ApiService, ComponentService, DomainService, GroupService, KindService, ResourceService,
    SystemService, UserService,
};
pub use location::LocationService;

/// Path of the catalog API, relative to the client base URL.
pub const CATALOG_PATH: &str = "/catalog";

/// Entry point to every catalog operation.
#[derive(Debug, Clone)]
pub struct CatalogService {
    entities: EntityService,
    apis: ApiService,
    components: ComponentService,
    domains: DomainService,
    groups: GroupService,
    locations: LocationService,
    resources: ResourceService,
    systems: SystemService,
    users: UserService,
}

impl CatalogService {
    pub(crate) fn new(transport: Arc<Transport>, default_namespace: Arc<str>) -> Self {
        let t = || Arc::clone(&transport);
        let ns = || Arc::clone(&default_namespace);

        Self {
            entities: EntityService::new(t(), CATALOG_PATH),
            apis: KindService::new(t(), CATALOG_PATH, ns()),
            components: KindService::new(t(), CATALOG_PATH, ns()),
            domains: KindService::new(t(), CATALOG_PATH, ns()),
            groups: KindService::new(t(), CATALOG_PATH, ns()),
            locations: LocationService::new(t(), CATALOG_PATH, ns()),
            resources: KindService::new(t(), CATALOG_PATH, ns()),
            systems: KindService::new(t(), CATALOG_PATH, ns()),
            users: KindService::new(t(), CATALOG_PATH, ns()),
        }
    }

    /// Untyped list/get/delete by UID.
    pub fn entities(&self) -> &EntityService {
        &self.entities
    }

    pub fn apis(&self) -> &ApiService {
        &self.apis
    }

    pub fn components(&self) -> &ComponentService {
        &self.components
    }

    pub fn domains(&self) -> &DomainService {
        &self.domains
    }

    pub fn groups(&self) -> &GroupService {
        &self.groups
    }

    /// Location entities plus the location lifecycle endpoints.
    pub fn locations(&self) -> &LocationService {
        &self.locations
    }

    pub fn resources(&self) -> &ResourceService {
        &self.resources
    }

    pub fn systems(&self) -> &SystemService {
        &self.systems
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }
}
