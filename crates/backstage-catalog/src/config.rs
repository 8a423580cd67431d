//! Configuration for the catalog client and CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::DEFAULT_NAMESPACE;
use crate::error::CatalogError;

pub const ENV_BASE_URL: &str = "BACKSTAGE_BASE_URL";
pub const ENV_NAMESPACE: &str = "BACKSTAGE_NAMESPACE";
pub const ENV_TOKEN: &str = "BACKSTAGE_TOKEN";

/// Errors raised while loading configuration or building a client from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("token is not a valid header value")]
    InvalidToken,

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Client(#[from] CatalogError),
}

/// Client configuration — typically stored at `~/.backstage/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backstage backend base URL, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Namespace used when a lookup does not name one.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Bearer token (or read from BACKSTAGE_TOKEN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout applied to the HTTP client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_namespace: default_namespace(),
            token: None,
            timeout_secs: None,
            user_agent: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl ClientConfig {
    /// `~/.backstage/config.toml`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(".backstage").join("config.toml"))
    }

    /// Load the default config file if it exists, then apply environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Override fields from `BACKSTAGE_*` variables as returned by `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(ns) = lookup(ENV_NAMESPACE) {
            self.default_namespace = ns;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.token = Some(token);
        }
    }

    /// Build the HTTP client handed to the catalog client: timeout and
    /// bearer token are set here, never by the transport.
    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(ref token) = self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ConfigError::InvalidToken)?;
            value.set_sensitive(true);
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        Ok(builder.build()?)
    }
}

fn default_base_url() -> String {
    "http://localhost:7007/api".into()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.into()
}

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "warn,backstage_catalog=info".into()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config.base_url, "http://localhost:7007/api");
        assert_eq!(config.default_namespace, "default");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let config = ClientConfig::from_toml_str(
            r#"
            base_url = "https://backstage.example.com/api"
            default_namespace = "platform"
            token = "s3cret"
            timeout_secs = 10

            [logging]
            format = "json"
            filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://backstage.example.com/api");
        assert_eq!(config.default_namespace, "platform");
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ClientConfig::from_toml_str("timeout_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_BASE_URL, "http://backstage:7007/api"),
            (ENV_TOKEN, "abc"),
        ]);

        let mut config = ClientConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://backstage:7007/api");
        assert_eq!(config.default_namespace, "default");
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_http_client_rejects_bad_token() {
        let config = ClientConfig {
            token: Some("line\nbreak".into()),
            ..Default::default()
        };
        assert!(matches!(config.http_client(), Err(ConfigError::InvalidToken)));
    }
}
