//! Generic HTTP client tools
//!
//! Shared request/response handling for every operation of the REST client:
//! sending, logging, status classification and body decoding.
//!
//! # design principles
//! - **One send path** - all operations go through [`HttpUtils::execute_request`]
//! - **No retries** - a failed request is reported once and abandoned
//! - **Per-operation decoding** - JSON bodies are parsed, text bodies are passed through untouched

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::Operation;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Maximum number of bytes of a body written to the log.
const LOG_BODY_LIMIT: usize = 256;

/// 创建带超时配置和 JSON Content-Type 的 HTTP Client
pub fn create_http_client() -> Result<Client, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ApiError::Network {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// Only transport failures are errors here; status classification is
    /// left to [`HttpUtils::ensure_success`].
    pub async fn execute_request(
        request_builder: RequestBuilder,
        operation: Operation,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{}] {} {url}", operation.name(), operation.method());

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{}] Response Status: {status_code}", operation.name());

        let response_text = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{}] Response Body: {}",
            operation.name(),
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Maps a non-2xx status to an error.
    ///
    /// A 404 on an item-scoped operation becomes [`ApiError::NotFound`]; every
    /// other failure carries the status and the raw body.
    pub fn ensure_success(
        status: u16,
        body: String,
        operation: Operation,
        resource_id: Option<&str>,
    ) -> Result<String, ApiError> {
        if (200..300).contains(&status) {
            return Ok(body);
        }

        if status == 404 && operation.is_item_scoped() {
            if let Some(id) = resource_id {
                log::warn!("[{}] Domain {id} not found", operation.name());
                return Err(ApiError::NotFound { id: id.to_string() });
            }
        }

        log::warn!(
            "[{}] HTTP {status}: {}",
            operation.name(),
            truncate_for_log(&body)
        );
        Err(ApiError::RequestFailed { status, body })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, operation: Operation) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{}] JSON parse failed: {e}", operation.name());
            log::error!(
                "[{}] Raw response: {}",
                operation.name(),
                truncate_for_log(response_text)
            );
            ApiError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// Truncate a body for logging without splitting a UTF-8 sequence.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ensure_success ----

    #[test]
    fn success_passes_body_through() {
        let body = HttpUtils::ensure_success(200, "ok".into(), Operation::Delete, Some("7"));
        assert_eq!(body, Ok("ok".to_string()));
    }

    #[test]
    fn created_is_success() {
        let body = HttpUtils::ensure_success(201, "{}".into(), Operation::Create, None);
        assert!(body.is_ok());
    }

    #[test]
    fn not_found_on_item_maps_to_not_found() {
        let result = HttpUtils::ensure_success(404, "\"Not found\"".into(), Operation::GetOne, Some("42"));
        assert_eq!(result, Err(ApiError::NotFound { id: "42".into() }));
    }

    #[test]
    fn not_found_on_list_is_request_failed() {
        let result = HttpUtils::ensure_success(404, "nope".into(), Operation::List, None);
        assert!(
            matches!(&result, Err(ApiError::RequestFailed { status: 404, .. })),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn server_error_keeps_body() {
        let result = HttpUtils::ensure_success(500, "boom".into(), Operation::Update, Some("1"));
        assert_eq!(
            result,
            Err(ApiError::RequestFailed {
                status: 500,
                body: "boom".into()
            })
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#, Operation::List);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json("not json", Operation::List);
        assert!(
            matches!(&result, Err(ApiError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- truncate_for_log ----

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("hello"), "hello");
    }

    #[test]
    fn long_body_truncated_on_char_boundary() {
        let s = "域".repeat(200);
        let out = truncate_for_log(&s);
        assert!(out.contains("[truncated, total 600 bytes]"));
        assert!(out.len() < s.len());
    }
}
