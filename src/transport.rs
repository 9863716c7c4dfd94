//! The authorized request issuer seam.
//!
//! The client never talks to the network directly: it hands a
//! [`RequestDescriptor`] to an [`AuthorizedRequester`], which attaches
//! credentials, performs the HTTP call, and returns whatever the server
//! answered. Only failures to obtain a response at all (connect errors,
//! timeouts) are errors at this layer; a response that arrived is
//! returned with its status code for the client to interpret, so raw
//! payloads stay available on every path.
//!
//! [`StaticTokenRequester`] is the batteries-included implementation:
//! a `reqwest` client that sends a fixed Bearer token. Anything else
//! (token refresh, alternative auth schemes, test doubles) implements
//! the trait and is injected at client construction.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{DnsError, Result};
use crate::request::RequestDescriptor;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// A raw HTTP response: status plus unparsed body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed `Retry-After` header in seconds, when present.
    pub retry_after: Option<u64>,
    /// Unparsed response body.
    pub body: String,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Attaches credentials to a request descriptor and performs the call.
///
/// Implementations must be safe to share across tasks; the client
/// holds one behind an `Arc` and issues from every operation and every
/// zone handle derived from it. Timeouts and any retry policy are this
/// layer's responsibility; the client above never retries.
#[async_trait]
pub trait AuthorizedRequester: Send + Sync {
    /// Perform the request and resolve with the raw outcome.
    ///
    /// # Errors
    ///
    /// [`DnsError::Network`] or [`DnsError::Timeout`] when no response
    /// could be obtained. Responses with error status codes are NOT
    /// errors here; they come back as [`ApiResponse`] values.
    async fn issue(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse>;
}

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| DnsError::Configuration {
            param: "http_client".to_string(),
            detail: e.to_string(),
        })
}

/// Issues requests with a fixed Bearer token.
pub struct StaticTokenRequester {
    client: Client,
    token: String,
}

impl StaticTokenRequester {
    /// A requester sending `Authorization: Bearer {token}` on every
    /// request, with default connect/request timeouts.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_http_client()?,
            token: token.into(),
        })
    }
}

#[async_trait]
impl AuthorizedRequester for StaticTokenRequester {
    async fn issue(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        let mut request = self
            .client
            .request(descriptor.method.clone(), &descriptor.url)
            .header("Authorization", format!("Bearer {}", self.token));
        if let Some(ref body) = descriptor.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DnsError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                DnsError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        // body 消费前先取 Retry-After
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response.text().await.map_err(|e| DnsError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        Ok(ApiResponse {
            status,
            retry_after,
            body,
        })
    }
}
