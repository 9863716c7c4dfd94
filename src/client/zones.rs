//! Zone operations: create, list (single page or stream), and bare
//! handle construction.

use futures::Stream;
use reqwest::Method;
use serde_json::json;

use crate::error::{DnsError, Result};
use crate::pagination::{self, Page};
use crate::types::{ListZonesQuery, ZoneConfig, ZonePage};
use crate::zone::Zone;

use super::DnsClient;
use super::types::ManagedZonesListResponse;

impl DnsClient {
    /// Create a managed zone.
    ///
    /// Issues one `POST` to the zones collection. On success the raw
    /// response resource is wrapped into a [`Zone`] handle (name taken
    /// from the response, metadata set to the full payload).
    /// `config.description` defaults to `""` when absent.
    ///
    /// # Errors
    ///
    /// [`DnsError::Validation`], before any request is issued, when
    /// `name` or `config.dns_name` is blank. Transport errors pass
    /// through unchanged, raw response attached.
    pub async fn create_zone(&self, name: &str, config: ZoneConfig) -> Result<Zone> {
        // 参数校验在任何 I/O 之前完成
        if name.trim().is_empty() {
            return Err(DnsError::Validation {
                param: "name".to_string(),
                detail: "a zone name is required".to_string(),
            });
        }
        if config.dns_name.trim().is_empty() {
            return Err(DnsError::Validation {
                param: "dns_name".to_string(),
                detail: "a DNS domain name is required".to_string(),
            });
        }

        let body = json!({
            "name": name,
            "dnsName": config.dns_name,
            "description": config.description.as_deref().unwrap_or(""),
        });

        let descriptor =
            self.inner
                .builder
                .build(Method::POST, "/managedZones", &[], Some(body));
        let raw = self.request_json(descriptor).await?;
        Zone::from_resource(self.clone(), raw)
    }

    /// Fetch one page of zones.
    ///
    /// Single-call mode: exactly one `GET`, no auto-pagination. The
    /// returned [`ZonePage`] carries the zones, the continuation query
    /// (`Some` iff more pages exist; feed it back in to fetch the next
    /// page), and the raw payload.
    ///
    /// # Errors
    ///
    /// Transport errors pass through unchanged; [`DnsError::Parse`]
    /// when the payload isn't a zone list.
    pub async fn get_zones(&self, query: &ListZonesQuery) -> Result<ZonePage> {
        self.fetch_zone_page(query.clone()).await
    }

    /// All zones as a lazy stream, auto-paginating from `query`.
    ///
    /// Sequence mode over the same page-fetch primitive as
    /// [`get_zones`](Self::get_zones): zones arrive in server order,
    /// pages in continuation order, one page request in flight at a
    /// time, the next requested only as the consumer keeps pulling.
    /// Dropping the stream stops the traversal. Each call starts a
    /// fresh, independent traversal from `query`.
    ///
    /// An error on any page ends the stream with that error; none of
    /// the failing page's zones are emitted.
    pub fn zones(&self, query: ListZonesQuery) -> impl Stream<Item = Result<Zone>> + use<> {
        let client = self.clone();
        pagination::into_stream(query, move |q| {
            let client = client.clone();
            async move { client.fetch_zone_page(q).await }
        })
    }

    /// A bare handle to the named zone. No network I/O; the handle's
    /// metadata stays unset until fetched.
    ///
    /// # Errors
    ///
    /// [`DnsError::Validation`] when `name` is blank.
    pub fn zone(&self, name: &str) -> Result<Zone> {
        if name.trim().is_empty() {
            return Err(DnsError::Validation {
                param: "name".to_string(),
                detail: "a zone name is required".to_string(),
            });
        }
        Ok(Zone::new(self.clone(), name))
    }

    /// 取回一页 zone；单次调用与流式遍历共用的原语
    pub(crate) async fn fetch_zone_page(&self, query: ListZonesQuery) -> Result<ZonePage> {
        let descriptor = self.inner.builder.build(
            Method::GET,
            "/managedZones",
            &query.to_query_pairs(),
            None,
        );
        let raw = self.request_json(descriptor).await?;

        let parsed: ManagedZonesListResponse =
            serde_json::from_value(raw.clone()).map_err(|e| DnsError::Parse {
                detail: format!("zone list response: {e}"),
            })?;

        let items = parsed
            .managed_zones
            .into_iter()
            .map(|resource| Zone::from_resource(self.clone(), resource))
            .collect::<Result<Vec<_>>>()?;

        // 空 token 视为终止
        let next_query = parsed
            .next_page_token
            .filter(|token| !token.is_empty())
            .map(|token| query.with_page_token(token));

        Ok(Page {
            items,
            next_query,
            raw,
        })
    }
}
