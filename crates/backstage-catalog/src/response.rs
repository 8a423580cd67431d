//! Response envelope returned by every catalog operation.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// A reply from the catalog API.
///
/// HTTP status codes are not turned into errors: a `404` or `409` comes back
/// here with `body: None` and, when the server sent one, the decoded
/// [`ErrorResponse`].
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status of the reply.
    pub status: StatusCode,

    /// Reply headers.
    pub headers: HeaderMap,

    /// Decoded body. `None` for empty bodies and non-2xx replies.
    pub body: Option<T>,

    /// Decoded error body of a non-2xx reply, if it had the usual shape.
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Consume the response and return the decoded body.
    pub fn into_body(self) -> Option<T> {
        self.body
    }

    /// Map the decoded body, keeping status, headers and error.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            headers: self.headers,
            body: self.body.map(f),
            error: self.error,
        }
    }
}

/// Error body sent by the catalog backend alongside non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ErrorRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ErrorStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Error class name, e.g. `NotFoundError`.
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorRequest {
    pub method: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorStatus {
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error.name, self.error.message)
    }
}
