//! Managed zone handles.

use serde_json::Value;

use crate::client::DnsClient;
use crate::error::{DnsError, Result};
use crate::types::ZoneInfo;

/// A named managed zone, scoped to a [`DnsClient`].
///
/// Construction performs no network I/O. `metadata` holds the
/// last-fetched raw server representation of the zone: handles wrapped
/// from a create/list response carry the full payload, handles from
/// [`DnsClient::zone()`](crate::DnsClient::zone) carry none until an
/// operation fetches it.
#[derive(Debug, Clone)]
pub struct Zone {
    client: DnsClient,
    name: String,
    metadata: Option<Value>,
}

impl Zone {
    /// Bind a bare handle to a client and a name. No I/O.
    pub(crate) fn new(client: DnsClient, name: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            metadata: None,
        }
    }

    /// Wrap a raw zone resource from a server response. The handle's
    /// name is taken from the payload's `name` field and the whole
    /// payload becomes the metadata.
    pub(crate) fn from_resource(client: DnsClient, resource: Value) -> Result<Self> {
        let name = resource
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| DnsError::Parse {
                detail: "zone resource is missing the 'name' field".to_string(),
            })?
            .to_string();
        Ok(Self {
            client,
            name,
            metadata: Some(resource),
        })
    }

    /// The zone's name, unique within its project.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw server representation, if this handle has one. Not
    /// authoritative until fetched; overwritten on every successful
    /// create/list response.
    #[must_use]
    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Typed view of [`metadata`](Self::metadata).
    ///
    /// Returns `Ok(None)` when no metadata has been fetched yet.
    ///
    /// # Errors
    ///
    /// [`DnsError::Parse`] when the stored payload doesn't deserialize
    /// as a zone resource.
    pub fn info(&self) -> Result<Option<ZoneInfo>> {
        self.metadata
            .as_ref()
            .map(|m| serde_json::from_value(m.clone()))
            .transpose()
            .map_err(|e| DnsError::Parse {
                detail: format!("zone metadata: {e}"),
            })
    }

    /// The client this handle is scoped to.
    #[must_use]
    pub fn client(&self) -> &DnsClient {
        &self.client
    }
}
