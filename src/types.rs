use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::Page;
use crate::zone::Zone;

// ============ Pagination ============

/// Query parameters for the zone list operation.
///
/// The API uses opaque continuation tokens: the server returns a
/// `nextPageToken` when more results exist, and the client echoes it
/// back as `pageToken` to fetch the following page.
///
/// # Default
///
/// The default is the empty query: no page-size cap, first page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListZonesQuery {
    /// Maximum number of zones per page. The server applies its own
    /// cap when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    /// Opaque continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl ListZonesQuery {
    /// Build the continuation query for the next page.
    ///
    /// Returns a new query with only `page_token` replaced; every other
    /// field is carried through unchanged, so a `max_results` cap keeps
    /// applying across the whole traversal. The caller's query is never
    /// mutated.
    #[must_use]
    pub fn with_page_token(&self, token: impl Into<String>) -> Self {
        Self {
            page_token: Some(token.into()),
            ..self.clone()
        }
    }

    /// 展开为 URL 查询参数对（未设置的字段省略）
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(max) = self.max_results {
            pairs.push(("maxResults", max.to_string()));
        }
        if let Some(ref token) = self.page_token {
            pairs.push(("pageToken", token.clone()));
        }
        pairs
    }
}

/// One page of zones: the items, the continuation query, and the raw
/// server payload for observability.
///
/// `next_query` is `Some` iff the server indicated more pages exist;
/// treat `None` as terminal.
pub type ZonePage = Page<ListZonesQuery, Zone>;

// ============ Zone configuration ============

/// Configuration for creating a managed zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    /// DNS domain name of the zone, as an absolute name
    /// (e.g. `"example.com."`). Required.
    pub dns_name: String,
    /// Human-readable description. Defaults to `""` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ZoneConfig {
    /// Configuration for a zone over the given DNS domain name.
    pub fn new(dns_name: impl Into<String>) -> Self {
        Self {
            dns_name: dns_name.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ============ Zone metadata view ============

/// Typed view of a zone resource as returned by the server.
///
/// Obtained by deserializing a [`Zone`](crate::Zone) handle's raw
/// metadata via [`Zone::info()`](crate::Zone::info). Fields the server
/// omits deserialize to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInfo {
    /// Server-assigned zone identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User-chosen zone name, unique within a project.
    pub name: String,
    /// DNS domain name of the zone.
    pub dns_name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Authoritative name servers delegated to this zone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name_servers: Vec<String>,
    /// When the zone was created, if known.
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<DateTime<Utc>>,
}
