//! Zone and record resolution
//!
//! Given the fresh zone/record listings fetched for one request, pick the
//! zone that owns the hostname and any pre-existing record at that name.

use crate::traits::{DnsRecord, Zone};

/// Find the zone owning `hostname`.
///
/// A zone owns the hostname when its name is a suffix of it (the hostname
/// equals the zone name, or ends with it). The first matching zone in
/// provider list order wins; there is deliberately no longest-suffix
/// tie-break, so an account owning both `example.com` and
/// `sub.example.com` resolves `host.sub.example.com` to whichever the
/// provider lists first.
pub fn owning_zone<'a>(zones: &'a [Zone], hostname: &str) -> Option<&'a Zone> {
    zones.iter().find(|zone| hostname.ends_with(&zone.name))
}

/// Find a pre-existing record for `hostname`.
///
/// Matches on exact name equality only; the record type is not part of the
/// key. A hostname currently holding an A record will therefore be matched
/// (and later overwritten) by an AAAA update, and vice versa: dual-stack
/// replacement, not side-by-side tracking. First match wins if the
/// provider returns duplicates.
pub fn existing_record<'a>(records: &'a [DnsRecord], hostname: &str) -> Option<&'a DnsRecord> {
    records.iter().find(|record| record.name == hostname)
}

/// Build the relative record name written to the provider: `"@"` when the
/// hostname is the zone apex, otherwise the hostname with the trailing
/// `.<zone>` suffix stripped.
pub fn relative_record_name(hostname: &str, zone_name: &str) -> String {
    match hostname.strip_suffix(zone_name) {
        Some("") => "@".to_string(),
        Some(prefix) => prefix.trim_end_matches('.').to_string(),
        // Unreachable when the zone came from owning_zone
        None => hostname.to_string(),
    }
}
