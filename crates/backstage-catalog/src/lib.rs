//! # backstage-catalog
//!
//! Typed async client for the Backstage Software Catalog API.
//!
//! The crate covers:
//! - Listing, fetching and deleting entities of any kind by UID
//! - Fetching entities by name into strongly-typed kind structures
//!   (Component, API, System, Domain, Group, User, Resource, Location)
//! - Registering, listing and removing catalog locations
//!
//! HTTP transport concerns such as authentication, proxies and timeouts
//! belong to the `reqwest::Client` handed to [`BackstageClient::new`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use backstage_catalog::{BackstageClient, ListEntityOptions, ListEntityOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BackstageClient::new("http://localhost:7007/api", Some("default"), None)?;
//!
//!     let options = ListEntityOptions::new()
//!         .filter("kind=component")
//!         .order_by(ListEntityOrder::descending("metadata.name"));
//!     let entities = client.catalog().entities().list(Some(&options)).await?;
//!     println!("{} entities", entities.body.unwrap_or_default().len());
//!
//!     let component = client.catalog().components().get("artist-web", None).await?;
//!     if let Some(component) = component.body {
//!         println!("owner: {}", component.spec.owner);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod kinds;
pub mod response;
pub mod telemetry;
pub mod transport;

// Re-exports
pub use catalog::{
    CatalogService, EntityService, KindService, ListEntityOptions, ListEntityOrder,
    LocationService, ORDER_ASCENDING, ORDER_DESCENDING,
};
pub use client::{BackstageClient, DEFAULT_NAMESPACE};
pub use config::{ClientConfig, ConfigError, LogFormat, LoggingConfig};
pub use entity::{
    Entity, EntityLink, EntityMeta, EntityRelation, EntityRelationTarget, EntityStatus,
    EntityStatusItem, EntityStatusItemError, TypedEntity,
};
pub use error::{CatalogError, CatalogResult};
pub use kinds::{
    ApiEntityV1alpha1, ComponentEntityV1alpha1, DomainEntityV1alpha1, GroupEntityV1alpha1,
    KindSpec, LocationCreateResponse, LocationEntityV1alpha1, LocationListResponse,
    LocationResponse, ResourceEntityV1alpha1, SystemEntityV1alpha1, UserEntityV1alpha1,
};
pub use response::{ApiResponse, ErrorResponse};
pub use transport::Transport;
