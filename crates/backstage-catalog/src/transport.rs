//! Transport — request construction and JSON decoding over an injected
//! `reqwest::Client`.
//!
//! Paths are joined onto the base URL segment by segment, so a base URL with
//! a path prefix (`https://host/api`) composes with relative request paths
//! (`/catalog/entities` becomes `https://host/api/catalog/entities`).

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use url::Url;

use crate::error::{CatalogError, CatalogResult};
use crate::response::{ApiResponse, ErrorResponse};

/// Media type used for request and response bodies.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Builds and executes requests against the catalog backend.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    base_url: Url,
    user_agent: String,
}

impl Transport {
    /// Create a transport for `base_url`, which must be able to carry path
    /// segments.
    pub fn new(http: Client, base_url: Url, user_agent: impl Into<String>) -> CatalogResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::UnsupportedBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http,
            base_url,
            user_agent: user_agent.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub(crate) fn set_user_agent(&mut self, user_agent: String) {
        self.user_agent = user_agent;
    }

    /// Resolve `path` against the base URL.
    ///
    /// A path containing `://` is taken as an absolute URL. Otherwise its
    /// segments are appended to the base path and any `?query` suffix is kept
    /// verbatim.
    pub fn resolve(&self, path: &str) -> CatalogResult<Url> {
        if path.contains("://") {
            return Ok(Url::parse(path)?);
        }

        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::UnsupportedBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()));
        url.set_query(query.filter(|q| !q.is_empty()));
        url.set_fragment(None);
        Ok(url)
    }

    /// Build a request for `method` and `path`, JSON-encoding `body` if given.
    pub fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> CatalogResult<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;
        let payload = body.map(serde_json::to_vec).transpose()?;

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));

        if !self.user_agent.is_empty() {
            match HeaderValue::from_str(&self.user_agent) {
                Ok(value) => {
                    headers.insert(USER_AGENT, value);
                }
                Err(_) => {
                    tracing::warn!(user_agent = %self.user_agent, "Ignoring invalid User-Agent");
                }
            }
        }

        if let Some(payload) = payload {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
            *request.body_mut() = Some(payload.into());
        }

        Ok(request)
    }

    /// Send `request` and decode a 2xx reply body into `T`.
    ///
    /// An empty body is not an error; it yields `body: None`. Non-2xx replies
    /// are returned as-is with the error body decoded best-effort.
    pub async fn execute<T>(&self, request: Request) -> CatalogResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(%method, %url, "Sending catalog request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            len = bytes.len(),
            "Received catalog response"
        );

        if !status.is_success() {
            return Ok(ApiResponse {
                status,
                headers,
                body: None,
                error: decode_error_body(&bytes),
            });
        }

        match decode_body(&bytes) {
            Ok(body) => Ok(ApiResponse {
                status,
                headers,
                body,
                error: None,
            }),
            Err(source) => Err(CatalogError::Decode {
                status,
                headers,
                body: String::from_utf8_lossy(&bytes).into_owned(),
                source,
            }),
        }
    }

    /// Send `request` and discard whatever body comes back.
    pub async fn execute_discard(&self, request: Request) -> CatalogResult<ApiResponse<()>> {
        let response = self.execute::<IgnoredAny>(request).await?;
        Ok(response.map(|_| ()))
    }
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// Decode `bytes` into `T`, treating an empty body as "no data".
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, serde_json::Error> {
    if is_blank(bytes) {
        return Ok(None);
    }
    serde_json::from_slice(bytes).map(Some)
}

fn decode_error_body(bytes: &[u8]) -> Option<ErrorResponse> {
    if is_blank(bytes) {
        return None;
    }
    match serde_json::from_slice(bytes) {
        Ok(err) => Some(err),
        Err(e) => {
            tracing::debug!(error = %e, "Error reply body is not a catalog error object");
            None
        }
    }
}
