//! # cloud-dns-client
//!
//! An async client library for the Google Cloud DNS managed-zone API:
//! create and list managed zones, and proxy authenticated requests to
//! the REST backend through an injectable request issuer.
//!
//! This crate performs no DNS wire-protocol work at all. "DNS" here
//! names the remote control plane being wrapped, not a resolver.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS
//!   implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cloud-dns-client = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloud_dns_client::{DnsClient, ListZonesQuery, ZoneConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a client for one project (Bearer-token auth)
//!     let client = DnsClient::with_token("my-project", "oauth2-access-token")?;
//!
//!     // 2. Create a managed zone
//!     let zone = client
//!         .create_zone("my-zone", ZoneConfig::new("example.com."))
//!         .await?;
//!     println!("created {}", zone.name());
//!
//!     // 3. List one page of zones
//!     let page = client.get_zones(&ListZonesQuery::default()).await?;
//!     for zone in &page.items {
//!         println!("{}", zone.name());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! List endpoints are also consumable as a lazy stream that paginates
//! on demand: the next page is requested only as the consumer keeps
//! pulling, and dropping the stream stops the traversal.
//!
//! ```rust,no_run
//! # use cloud_dns_client::{DnsClient, ListZonesQuery, Result};
//! # async fn example(client: DnsClient) -> Result<()> {
//! use futures::TryStreamExt;
//!
//! let mut zones = std::pin::pin!(client.zones(ListZonesQuery::default()));
//! while let Some(zone) = zones.try_next().await? {
//!     println!("{}", zone.name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, DnsError>`](DnsError). Bad input
//! ([`DnsError::Configuration`], [`DnsError::Validation`]) is rejected
//! before any request is issued; transport failures arrive through the
//! async path with the raw server payload attached
//! ([`DnsError::raw_response()`]). This layer never retries; retry
//! policy belongs to the [`AuthorizedRequester`] or to the caller.

mod client;
mod error;
mod pagination;
mod request;
mod transport;
mod types;
mod utils;
mod zone;

// Re-export error types
pub use error::{DnsError, Result};

// Re-export the client handle and zone handle
pub use client::DnsClient;
pub use zone::Zone;

// Re-export request/transport seams for custom issuers
pub use request::{RequestBuilder, RequestDescriptor};
pub use transport::{ApiResponse, AuthorizedRequester, StaticTokenRequester};

// Re-export parameter and result types
pub use pagination::{Page, into_stream};
pub use types::{ListZonesQuery, ZoneConfig, ZoneInfo, ZonePage};
