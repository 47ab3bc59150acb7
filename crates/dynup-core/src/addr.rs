//! IP literal classification and canonicalization
//!
//! Decides whether `myip` is an IPv4 or IPv6 literal and produces the
//! canonical text form sent to the provider. The standard library parsers
//! carry the exact validation contract needed here: IPv4 must be four
//! dot-separated decimal octets in [0,255] with no leading zeros and no
//! extraneous characters; IPv6 is standard colon-hex including `::`
//! compression and an optional embedded IPv4 tail. `Display` yields the
//! canonical form (lowercase, zero-compressed per RFC 5952 for IPv6).

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};

/// A classified IP address from the `myip` parameter
///
/// The variant decides the DNS record type (`A` vs `AAAA`); the canonical
/// string form is the record content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAddress {
    /// An IPv4 address, becomes an A record
    V4(Ipv4Addr),
    /// An IPv6 address, becomes an AAAA record
    V6(Ipv6Addr),
}

impl HostAddress {
    /// Classify a text literal as IPv4, IPv6, or neither.
    pub fn classify(literal: &str) -> Result<Self> {
        match literal.parse::<IpAddr>() {
            Ok(IpAddr::V4(v4)) => Ok(Self::V4(v4)),
            Ok(IpAddr::V6(v6)) => Ok(Self::V6(v6)),
            Err(_) => Err(Error::InvalidAddress(literal.to_string())),
        }
    }

    /// The DNS record type this address maps to
    pub fn record_type(&self) -> &'static str {
        match self {
            Self::V4(_) => "A",
            Self::V6(_) => "AAAA",
        }
    }

    /// Canonical textual form (dotted decimal / RFC 5952)
    pub fn canonical(&self) -> String {
        match self {
            Self::V4(v4) => v4.to_string(),
            Self::V6(v6) => v6.to_string(),
        }
    }
}
