//! REST HTTP 请求方法

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::types::{Operation, ResponseFormat};

use super::RestDomainApi;

impl RestDomainApi {
    /// Send one operation and return the raw body of a 2xx response.
    async fn send<B: Serialize + Sync>(
        &self,
        operation: Operation,
        url: &str,
        resource_id: Option<&str>,
        body: Option<&B>,
    ) -> Result<String> {
        let mut request = self.client.request(operation.method(), url);
        if let Some(body) = body {
            let body_json = serde_json::to_string(body).map_err(|e| ApiError::Serialization {
                detail: e.to_string(),
            })?;
            log::debug!("[{}] Request Body: {body_json}", operation.name());
            request = request.body(body_json);
        }

        let (status, text) = HttpUtils::execute_request(request, operation, url).await?;
        HttpUtils::ensure_success(status, text, operation, resource_id)
    }

    /// 执行返回 JSON 的请求
    pub(crate) async fn request_json<T, B>(
        &self,
        operation: Operation,
        url: &str,
        resource_id: Option<&str>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        debug_assert_eq!(operation.response_format(), ResponseFormat::Json);
        let text = self.send(operation, url, resource_id, body).await?;
        HttpUtils::parse_json(&text, operation)
    }

    /// 执行返回纯文本的请求，响应体不做解析
    pub(crate) async fn request_text(
        &self,
        operation: Operation,
        url: &str,
        resource_id: Option<&str>,
    ) -> Result<String> {
        debug_assert_eq!(operation.response_format(), ResponseFormat::Text);
        self.send::<()>(operation, url, resource_id, None).await
    }
}
