use thiserror::Error;

/// Unified error type for all domain API operations.
///
/// Every failed request surfaces as one of these variants. Callers own the
/// user-facing messaging and must not assume partial success: a mutation that
/// returned an error may or may not have reached the backend.
///
/// No variant is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The backend answered with a non-2xx status.
    #[error("Request failed (HTTP {status}): {body}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The requested record does not exist (HTTP 404 on an item endpoint).
    #[error("Domain not found: {id}")]
    NotFound {
        /// ID that was requested.
        id: String,
    },

    /// Failed to parse a JSON response body.
    #[error("Failed to parse response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Failed to serialize request body: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// 是否为预期行为（资源不存在、4xx 等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::RequestFailed { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// HTTP status carried by the error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

/// Result alias used across the API client.
pub type Result<T> = std::result::Result<T, ApiError>;
