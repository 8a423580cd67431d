//! Backstage client — the root handle holding the transport and the default
//! namespace.

use std::sync::Arc;

use reqwest::Client;
use url::Url;

use crate::catalog::CatalogService;
use crate::config::{ClientConfig, ConfigError};
use crate::error::CatalogResult;
use crate::transport::Transport;

/// Namespace used when neither the caller nor the configuration names one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("backstage-catalog/", env!("CARGO_PKG_VERSION"));

/// Client for the Backstage backend API.
///
/// Cheap to clone and safe to share between tasks: it holds only read-only
/// configuration and the injected `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct BackstageClient {
    transport: Arc<Transport>,
    default_namespace: Arc<str>,
    catalog: CatalogService,
}

impl BackstageClient {
    /// Create a client for `base_url` (e.g. `http://localhost:7007/api`).
    ///
    /// An empty or missing `default_namespace` becomes `"default"`. Pass a
    /// pre-configured `http` client to handle authentication, proxies or
    /// timeouts; otherwise a plain `reqwest::Client` is used.
    pub fn new(
        base_url: &str,
        default_namespace: Option<&str>,
        http: Option<Client>,
    ) -> CatalogResult<Self> {
        let base_url = Url::parse(base_url.strip_suffix('/').unwrap_or(base_url))?;
        let default_namespace = match default_namespace {
            Some(ns) if !ns.is_empty() => ns,
            _ => DEFAULT_NAMESPACE,
        };

        let transport = Transport::new(http.unwrap_or_default(), base_url, DEFAULT_USER_AGENT)?;
        Ok(Self::assemble(transport, Arc::from(default_namespace)))
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = config.http_client()?;
        let client = Self::new(&config.base_url, Some(&config.default_namespace), Some(http))?;
        Ok(match config.user_agent {
            Some(ref ua) => client.with_user_agent(ua.as_str()),
            None => client,
        })
    }

    /// Create from environment variables.
    ///
    /// Reads `BACKSTAGE_BASE_URL`, `BACKSTAGE_NAMESPACE`, `BACKSTAGE_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = ClientConfig::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        Self::from_config(&config)
    }

    /// Replace the `User-Agent` sent with every request.
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        let mut transport = (*self.transport).clone();
        transport.set_user_agent(user_agent.into());
        Self::assemble(transport, self.default_namespace)
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    pub fn user_agent(&self) -> &str {
        self.transport.user_agent()
    }

    /// Access the Software Catalog API.
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Shared transport, for requests the typed services do not cover.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    fn assemble(transport: Transport, default_namespace: Arc<str>) -> Self {
        let transport = Arc::new(transport);
        let catalog = CatalogService::new(Arc::clone(&transport), Arc::clone(&default_namespace));
        Self {
            transport,
            default_namespace,
            catalog,
        }
    }
}
