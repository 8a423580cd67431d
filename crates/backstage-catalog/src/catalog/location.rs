//! Location lifecycle: the only kind that can be registered and removed
//! through the client, under the sibling `/locations` endpoints.

use std::sync::Arc;

use reqwest::Method;

use crate::catalog::kind::KindService;
use crate::error::{CatalogError, CatalogResult};
use crate::kinds::location::LocationCreateRequest;
use crate::kinds::{
    LocationCreateResponse, LocationEntityV1alpha1, LocationListResponse, LocationResponse,
    LocationSpec,
};
use crate::response::ApiResponse;
use crate::transport::Transport;

pub(crate) const LOCATIONS_PATH: &str = "/locations";

/// Location type sent when registering a new location.
const LOCATION_TYPE_URL: &str = "url";

#[derive(Debug, Clone)]
pub struct LocationService {
    entities: KindService<LocationSpec>,
    transport: Arc<Transport>,
    api_path: String,
}

impl LocationService {
    pub(crate) fn new(
        transport: Arc<Transport>,
        catalog_path: &str,
        default_namespace: Arc<str>,
    ) -> Self {
        Self {
            entities: KindService::new(Arc::clone(&transport), catalog_path, default_namespace),
            transport,
            api_path: format!("{catalog_path}{LOCATIONS_PATH}"),
        }
    }

    /// Get a `Location` entity by name, as any other kind.
    pub async fn get(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> CatalogResult<ApiResponse<LocationEntityV1alpha1>> {
        self.entities.get(name, namespace).await
    }

    /// Register a URL location. With `dry_run` the server evaluates the
    /// location without persisting it and reports whether it `exists`.
    pub async fn create(
        &self,
        target: &str,
        dry_run: bool,
    ) -> CatalogResult<ApiResponse<LocationCreateResponse>> {
        if target.is_empty() {
            return Err(CatalogError::EmptyArgument("target"));
        }

        let body = LocationCreateRequest {
            target,
            location_type: LOCATION_TYPE_URL,
        };
        let path = format!("{}?dryRun={}", self.api_path, dry_run);

        tracing::info!(location = target, dry_run, "Registering catalog location");
        let request = self.transport.new_request(Method::POST, &path, Some(&body))?;
        self.transport.execute(request).await
    }

    /// List all registered locations.
    pub async fn list(&self) -> CatalogResult<ApiResponse<Vec<LocationListResponse>>> {
        let request = self
            .transport
            .new_request::<()>(Method::GET, &self.api_path, None)?;
        self.transport.execute(request).await
    }

    /// Get a registered location by its ID.
    pub async fn get_by_id(&self, id: &str) -> CatalogResult<ApiResponse<LocationResponse>> {
        let path = self.by_id_path(id)?;
        let request = self.transport.new_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(request).await
    }

    /// Remove a registered location by its ID.
    pub async fn delete_by_id(&self, id: &str) -> CatalogResult<ApiResponse<()>> {
        let path = self.by_id_path(id)?;
        tracing::info!(id, "Deleting catalog location");
        let request = self.transport.new_request::<()>(Method::DELETE, &path, None)?;
        self.transport.execute_discard(request).await
    }

    fn by_id_path(&self, id: &str) -> CatalogResult<String> {
        if id.is_empty() {
            return Err(CatalogError::EmptyArgument("id"));
        }
        Ok(format!("{}/{}", self.api_path, id))
    }
}
