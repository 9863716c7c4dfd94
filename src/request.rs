//! Request descriptor construction.
//!
//! A [`RequestBuilder`] is bound to an API base endpoint and a project
//! identifier at client construction and composes full request URLs
//! from relative paths. The resulting [`RequestDescriptor`] is the
//! value handed to an [`AuthorizedRequester`](crate::AuthorizedRequester),
//! which attaches credentials and performs the call.
//!
//! This layer is pure and never fails; presence checks on arguments
//! live in the callers.

use reqwest::Method;
use serde_json::Value;

/// A fully composed request, ready for an authorized issuer.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP verb.
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    /// JSON body, when the request carries one.
    pub body: Option<Value>,
}

/// Composes request descriptors against one project of the API.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    api_base: String,
    project_id: String,
}

impl RequestBuilder {
    /// A builder for `{api_base}/{project_id}` scoped requests.
    pub fn new(api_base: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
        }
    }

    /// The project identifier requests are scoped to.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The API base endpoint (no trailing slash).
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Compose a descriptor for `path` (relative, starting with `/`)
    /// with the given query pairs and optional JSON body.
    ///
    /// Query values are percent-encoded; an empty query produces no
    /// `?`. The query is passed through as given otherwise.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<Value>,
    ) -> RequestDescriptor {
        let mut url = format!("{}/{}{}", self.api_base, self.project_id, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        RequestDescriptor { method, url, body }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn builder() -> RequestBuilder {
        RequestBuilder::new("https://dns.googleapis.com/dns/v1/projects", "my-project")
    }

    #[test]
    fn composes_base_project_and_path() {
        let d = builder().build(Method::GET, "/managedZones", &[], None);
        assert_eq!(
            d.url,
            "https://dns.googleapis.com/dns/v1/projects/my-project/managedZones"
        );
        assert_eq!(d.method, Method::GET);
        assert!(d.body.is_none());
    }

    #[test]
    fn trailing_slash_on_base_is_normalized() {
        let b = RequestBuilder::new("https://dns.googleapis.com/dns/v1/projects/", "p");
        let d = b.build(Method::GET, "/managedZones", &[], None);
        assert_eq!(
            d.url,
            "https://dns.googleapis.com/dns/v1/projects/p/managedZones"
        );
    }

    #[test]
    fn query_pairs_are_appended_in_order() {
        let d = builder().build(
            Method::GET,
            "/managedZones",
            &[
                ("maxResults", "3".to_string()),
                ("pageToken", "tok-1".to_string()),
            ],
            None,
        );
        assert!(d.url.ends_with("/managedZones?maxResults=3&pageToken=tok-1"));
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let d = builder().build(
            Method::GET,
            "/managedZones",
            &[("pageToken", "a/b c".to_string())],
            None,
        );
        assert!(d.url.ends_with("?pageToken=a%2Fb%20c"));
    }

    #[test]
    fn body_is_attached_as_json() {
        let d = builder().build(
            Method::POST,
            "/managedZones",
            &[],
            Some(json!({"name": "my-zone"})),
        );
        assert_eq!(d.method, Method::POST);
        assert_eq!(d.body, Some(json!({"name": "my-zone"})));
    }
}
