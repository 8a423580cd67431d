//! Catalog client error types.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Backstage Catalog API.
///
/// A non-2xx reply from the server is not an error: it comes back as an
/// [`ApiResponse`](crate::ApiResponse) carrying the status and the decoded
/// error body so callers can branch on the status code.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The base URL or a request path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `mailto:` or `data:` URLs).
    #[error("base URL cannot be used for API requests: {0}")]
    UnsupportedBaseUrl(String),

    /// The request body could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An order clause used a direction other than `asc` or `desc`.
    #[error("invalid order direction: {0}")]
    InvalidOrderDirection(String),

    /// A required identifier was empty.
    #[error("{0} cannot be empty")]
    EmptyArgument(&'static str),

    /// HTTP transport error (connection, TLS, timeout configured on the client).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful reply carried a body that is not the expected JSON shape.
    /// The reply's headers and raw body are kept for inspection.
    #[error("failed to decode response (status {status}): {source}")]
    Decode {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Returns true for errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidOrderDirection(_) | CatalogError::EmptyArgument(_)
        )
    }
}

/// Catalog Result type alias.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_flagged() {
        assert!(CatalogError::EmptyArgument("uid").is_validation());
        assert!(CatalogError::InvalidOrderDirection("up".into()).is_validation());
        assert!(!CatalogError::UnsupportedBaseUrl("mailto:x".into()).is_validation());
    }

    #[test]
    fn test_empty_argument_message() {
        assert_eq!(
            CatalogError::EmptyArgument("target").to_string(),
            "target cannot be empty"
        );
    }
}
