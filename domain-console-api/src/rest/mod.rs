//! REST 集合资源客户端

mod api;
mod http;

use std::sync::Arc;

use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::http_client::create_http_client;
use crate::traits::{Clock, SystemClock};

/// Base URL of the hosted mock backend the console talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://6797aa2bc2c861de0c6d964c.mockapi.io/domain";

/// Domain collection client over HTTP/JSON.
///
/// `GET {base}`, `GET {base}/{id}`, `POST {base}`, `PUT {base}/{id}` and
/// `DELETE {base}/{id}`.
pub struct RestDomainApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) clock: Arc<dyn Clock>,
}

impl RestDomainApi {
    /// Create a client for the collection at `base_url`.
    ///
    /// The URL must be absolute http(s); a trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        Ok(Self {
            client: create_http_client()?,
            base_url,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used to stamp `createdDate`.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn collection_url(&self) -> String {
        self.base_url.clone()
    }

    pub(crate) fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id))
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{raw}: unsupported scheme {}",
            parsed.scheme()
        )));
    }
    Ok(trimmed.to_string())
}
