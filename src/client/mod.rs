//! The DNS client handle and its zone operations.

mod http;
mod types;
mod zones;

use std::fmt;
use std::sync::Arc;

use crate::error::{DnsError, Result};
use crate::request::RequestBuilder;
use crate::transport::{AuthorizedRequester, StaticTokenRequester};

/// 默认 API 端点（`{base}/{project}/managedZones`）
pub(crate) const DEFAULT_API_BASE: &str = "https://dns.googleapis.com/dns/v1/projects";

struct ClientInner {
    builder: RequestBuilder,
    requester: Arc<dyn AuthorizedRequester>,
}

/// Handle to the managed DNS zones of one project.
///
/// Holds the project identifier and the injected request issuer;
/// carries no mutable state. Cloning is cheap (`Arc`-shared) and every
/// clone issues through the same requester, which is safe to use from
/// concurrent tasks.
#[derive(Clone)]
pub struct DnsClient {
    inner: Arc<ClientInner>,
}

impl DnsClient {
    /// A client for `project_id`, issuing through `requester`.
    ///
    /// # Errors
    ///
    /// [`DnsError::Configuration`] when `project_id` is blank.
    pub fn new(
        project_id: impl Into<String>,
        requester: Arc<dyn AuthorizedRequester>,
    ) -> Result<Self> {
        Self::with_api_base(project_id, requester, DEFAULT_API_BASE)
    }

    /// A client authenticating with a fixed Bearer token via
    /// [`StaticTokenRequester`].
    ///
    /// # Errors
    ///
    /// [`DnsError::Configuration`] when `project_id` is blank or the
    /// HTTP client cannot be constructed.
    pub fn with_token(project_id: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let requester = StaticTokenRequester::new(token)?;
        Self::new(project_id, Arc::new(requester))
    }

    /// Like [`new`](Self::new), but against a non-default API endpoint
    /// (private deployments, emulators, tests).
    ///
    /// # Errors
    ///
    /// [`DnsError::Configuration`] when `project_id` is blank.
    pub fn with_api_base(
        project_id: impl Into<String>,
        requester: Arc<dyn AuthorizedRequester>,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        let project_id = project_id.into();
        if project_id.trim().is_empty() {
            return Err(DnsError::Configuration {
                param: "project_id".to_string(),
                detail: "a project identifier is required".to_string(),
            });
        }
        Ok(Self {
            inner: Arc::new(ClientInner {
                builder: RequestBuilder::new(api_base, project_id),
                requester,
            }),
        })
    }

    /// The project identifier this client is scoped to.
    #[must_use]
    pub fn project_id(&self) -> &str {
        self.inner.builder.project_id()
    }

    /// The API base endpoint in use.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.inner.builder.api_base()
    }
}

impl fmt::Debug for DnsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsClient")
            .field("project_id", &self.project_id())
            .field("api_base", &self.api_base())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! 单元测试用的脚本化 requester

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::error::{DnsError, Result};
    use crate::request::RequestDescriptor;
    use crate::transport::{ApiResponse, AuthorizedRequester};

    use super::DnsClient;

    /// Records every descriptor it receives and replays scripted
    /// outcomes in order.
    #[derive(Default)]
    pub(crate) struct MockRequester {
        requests: Mutex<Vec<RequestDescriptor>>,
        script: Mutex<VecDeque<Result<ApiResponse>>>,
    }

    impl MockRequester {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Queue a response with the given status and JSON body.
        pub fn push_response(&self, status: u16, body: serde_json::Value) {
            self.script
                .lock()
                .unwrap()
                .push_back(Ok(ApiResponse {
                    status,
                    retry_after: None,
                    body: body.to_string(),
                }));
        }

        /// Queue a response with a non-JSON body.
        pub fn push_text_response(&self, status: u16, body: &str) {
            self.script.lock().unwrap().push_back(Ok(ApiResponse {
                status,
                retry_after: None,
                body: body.to_string(),
            }));
        }

        /// Queue a transport-level failure.
        pub fn push_error(&self, error: DnsError) {
            self.script.lock().unwrap().push_back(Err(error));
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn request(&self, index: usize) -> RequestDescriptor {
            self.requests.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl AuthorizedRequester for MockRequester {
        async fn issue(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
            self.requests.lock().unwrap().push(descriptor.clone());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted response for {}", descriptor.url))
        }
    }

    /// A client whose requester has no scripted responses: any issued
    /// request fails the test.
    pub(crate) fn offline_client() -> DnsClient {
        DnsClient::new("test-project", MockRequester::new()).unwrap()
    }

    /// A client wired to the given mock.
    pub(crate) fn mock_client(mock: &Arc<MockRequester>) -> DnsClient {
        DnsClient::new("test-project", mock.clone() as Arc<dyn AuthorizedRequester>).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::MockRequester;
    use super::*;

    #[test]
    fn blank_project_id_is_configuration_error() {
        let res = DnsClient::new("", MockRequester::new());
        assert!(
            matches!(&res, Err(DnsError::Configuration { param, .. }) if param == "project_id"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn whitespace_project_id_is_configuration_error() {
        let res = DnsClient::new("   ", MockRequester::new());
        assert!(matches!(&res, Err(DnsError::Configuration { .. })));
    }

    #[test]
    fn default_api_base_applies() {
        let client = DnsClient::new("my-project", MockRequester::new()).unwrap();
        assert_eq!(client.project_id(), "my-project");
        assert_eq!(client.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn api_base_override() {
        let client = DnsClient::with_api_base(
            "my-project",
            MockRequester::new(),
            "http://localhost:8080/dns/v1/projects",
        )
        .unwrap();
        assert_eq!(client.api_base(), "http://localhost:8080/dns/v1/projects");
    }
}
