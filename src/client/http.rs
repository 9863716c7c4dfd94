//! HTTP 请求执行与响应解析
//!
//! 请求经由注入的 [`AuthorizedRequester`](crate::AuthorizedRequester)
//! 发出；这里只负责日志、状态码到错误的映射和成功响应的解析。
//! 传输错误原样向上传递，本层不做任何重试。

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DnsError, Result};
use crate::request::RequestDescriptor;
use crate::transport::ApiResponse;
use crate::utils::log_sanitizer::truncate_for_log;

use super::DnsClient;
use super::types::ApiErrorEnvelope;

impl DnsClient {
    /// 发出请求并将成功响应解析为 JSON
    pub(crate) async fn request_json(&self, descriptor: RequestDescriptor) -> Result<Value> {
        let response = self.issue_checked(&descriptor).await?;
        parse_json(&response.body)
    }

    /// 发出请求，检查状态码，返回原始响应
    async fn issue_checked(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        log::debug!("{} {}", descriptor.method, descriptor.url);

        let response = self.inner.requester.issue(descriptor).await?;

        log::debug!("Response Status: {}", response.status);
        log::debug!("Response Body: {}", truncate_for_log(&response.body));

        if response.status == 429 {
            log::warn!(
                "Rate limited (HTTP 429), retry_after={:?}",
                response.retry_after
            );
            return Err(DnsError::RateLimited {
                retry_after: response.retry_after,
                raw_message: Some(response.body),
            });
        }

        if matches!(response.status, 401 | 403) {
            return Err(DnsError::InvalidCredentials {
                raw_message: Some(response.body),
            });
        }

        if !response.is_success() {
            let message = envelope_message(&response.body);
            log::error!("API error (HTTP {}): {message}", response.status);
            return Err(DnsError::Api {
                status: response.status,
                message,
                raw_body: Some(response.body),
            });
        }

        Ok(response)
    }
}

/// 解析 JSON 响应
pub(crate) fn parse_json<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        DnsError::Parse {
            detail: e.to_string(),
        }
    })
}

/// 从错误信封中提取 message，缺失时退回占位文本
fn envelope_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| "Unknown error".to_string())
}
