// # DNS Provider Trait
//
// Defines the interface for the provider API consumed by the update
// pipeline: list the account's zones, list a zone's records, and create or
// update a single record.
//
// ## Implementations
//
// - Cloudflare: `dynup-provider-cloudflare` crate
// - Future: Route53, DigitalOcean, deSEC, etc.
//
// ## Trust Level
//
// Providers are isolated, stateless, single-shot components:
//
// - ✅ Perform HTTP/HTTPS API calls to their endpoints only
// - ✅ Parse provider-specific responses
// - ✅ Return success or failure
// - ❌ NO retry or backoff logic (a failure is terminal for the request;
//   the DDNS client retries on its own schedule)
// - ❌ NO caching of zones or records between calls
// - ❌ NO background tasks

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::addr::HostAddress;
use crate::error::Result;

/// A DNS zone owned by the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Provider-assigned zone identifier
    pub id: String,
    /// Zone apex name (e.g. "example.com")
    pub name: String,
}

/// One existing DNS record, as listed by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Provider-assigned record identifier
    pub id: String,
    /// Fully qualified record name (e.g. "home.example.com")
    pub name: String,
    /// Record type as reported by the provider ("A", "AAAA", "TXT", ...)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record content (for A/AAAA: the IP address text)
    pub content: String,
    /// Time-to-live in seconds
    pub ttl: u32,
    /// Whether the record sits behind the provider's proxy
    #[serde(default)]
    pub proxied: bool,
}

/// The address half of a record body, tagged by record type
///
/// A tagged variant instead of free-form `type`/`content` strings: the
/// type system keeps an A record from carrying an IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordContent {
    /// An A record with an IPv4 address
    A(Ipv4Addr),
    /// An AAAA record with an IPv6 address
    #[serde(rename = "AAAA")]
    Aaaa(Ipv6Addr),
}

impl RecordContent {
    /// The wire record type ("A" or "AAAA"), for logging
    pub fn record_type(&self) -> &'static str {
        match self {
            Self::A(_) => "A",
            Self::Aaaa(_) => "AAAA",
        }
    }
}

impl From<HostAddress> for RecordContent {
    fn from(addr: HostAddress) -> Self {
        match addr {
            HostAddress::V4(v4) => Self::A(v4),
            HostAddress::V6(v6) => Self::Aaaa(v6),
        }
    }
}

/// The record body sent to the provider on create and update
///
/// Serializes to the wire shape
/// `{"name": ..., "ttl": ..., "proxied": ..., "type": ..., "content": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPayload {
    /// Relative record name within the zone ("@" for the apex)
    pub name: String,
    /// Time-to-live in seconds
    pub ttl: u32,
    /// Whether to put the record behind the provider's proxy
    pub proxied: bool,
    /// Record type and address
    #[serde(flatten)]
    pub content: RecordContent,
}

/// Trait for DNS provider implementations
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// List all zones accessible to the account, in provider order.
    ///
    /// The pipeline resolves the owning zone by scanning this list in
    /// order, so implementations must not reorder it.
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// List all DNS records in a zone.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>>;

    /// Create a new record in the zone.
    async fn create_record(&self, zone_id: &str, payload: &RecordPayload) -> Result<()>;

    /// Overwrite an existing record, keyed by its provider id.
    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        payload: &RecordPayload,
    ) -> Result<()>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
