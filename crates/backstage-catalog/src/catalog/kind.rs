//! By-name lookup shared by every kind.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;

use crate::catalog::entity::ENTITIES_PATH;
use crate::entity::TypedEntity;
use crate::error::{CatalogError, CatalogResult};
use crate::kinds::{
    ApiSpec, ComponentSpec, DomainSpec, GroupSpec, KindSpec, ResourceSpec, SystemSpec, UserSpec,
};
use crate::response::ApiResponse;
use crate::transport::Transport;

pub type ApiService = KindService<ApiSpec>;
pub type ComponentService = KindService<ComponentSpec>;
pub type DomainService = KindService<DomainSpec>;
pub type GroupService = KindService<GroupSpec>;
pub type ResourceService = KindService<ResourceSpec>;
pub type SystemService = KindService<SystemSpec>;
pub type UserService = KindService<UserSpec>;

/// Fetches entities of kind `S::KIND` by name, decoding them into
/// [`TypedEntity<S>`].
pub struct KindService<S> {
    transport: Arc<Transport>,
    api_path: String,
    default_namespace: Arc<str>,
    _spec: PhantomData<fn() -> S>,
}

impl<S: KindSpec> KindService<S> {
    pub(crate) fn new(
        transport: Arc<Transport>,
        catalog_path: &str,
        default_namespace: Arc<str>,
    ) -> Self {
        Self {
            transport,
            api_path: format!("{catalog_path}{ENTITIES_PATH}"),
            default_namespace,
            _spec: PhantomData,
        }
    }

    /// Kind name served by this service.
    pub fn kind(&self) -> &'static str {
        S::KIND
    }

    /// Get an entity by name. A missing or empty `namespace` falls back to
    /// the client's default namespace.
    pub async fn get(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> CatalogResult<ApiResponse<TypedEntity<S>>> {
        let path = self.by_name_path(name, namespace)?;
        tracing::debug!(kind = S::KIND, name, "Fetching entity by name");
        let request = self.transport.new_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(request).await
    }

    pub(crate) fn by_name_path(&self, name: &str, namespace: Option<&str>) -> CatalogResult<String> {
        if name.is_empty() {
            return Err(CatalogError::EmptyArgument("name"));
        }
        let namespace = match namespace {
            Some(ns) if !ns.is_empty() => ns,
            _ => &*self.default_namespace,
        };
        Ok(format!(
            "{}/by-name/{}/{}/{}",
            self.api_path,
            S::KIND.to_lowercase(),
            namespace,
            name
        ))
    }
}

impl<S> Clone for KindService<S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            api_path: self.api_path.clone(),
            default_namespace: Arc::clone(&self.default_namespace),
            _spec: PhantomData,
        }
    }
}

impl<S: KindSpec> fmt::Debug for KindService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindService")
            .field("kind", &S::KIND)
            .field("api_path", &self.api_path)
            .field("default_namespace", &self.default_namespace)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::LocationSpec;
    use reqwest::Client;
    use url::Url;

    fn service<S: KindSpec>() -> KindService<S> {
        let transport = Transport::new(Client::new(), Url::parse("https://host/api").unwrap(), "t")
            .unwrap();
        KindService::new(Arc::new(transport), "/catalog", Arc::from("default"))
    }

    #[test]
    fn test_by_name_path_defaults_namespace() {
        let components = service::<ComponentSpec>();
        assert_eq!(
            components.by_name_path("example-website", None).unwrap(),
            "/catalog/entities/by-name/component/default/example-website"
        );
        assert_eq!(
            components.by_name_path("example-website", Some("")).unwrap(),
            "/catalog/entities/by-name/component/default/example-website"
        );
    }

    #[test]
    fn test_by_name_path_explicit_namespace_and_kind_case() {
        let apis = service::<ApiSpec>();
        assert_eq!(
            apis.by_name_path("artist-api", Some("music")).unwrap(),
            "/catalog/entities/by-name/api/music/artist-api"
        );
        assert_eq!(service::<LocationSpec>().kind(), "Location");
    }

    #[test]
    fn test_by_name_path_requires_name() {
        let users = service::<UserSpec>();
        assert!(matches!(
            users.by_name_path("", None),
            Err(CatalogError::EmptyArgument("name"))
        ));
    }
}
