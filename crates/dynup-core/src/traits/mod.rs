//! Core traits for the DDNS update endpoint
//!
//! This module defines the abstract interface to the DNS provider API and
//! the data model that crosses it.
//!
//! - [`DnsProvider`]: list zones/records, create and update records

pub mod dns_provider;

pub use dns_provider::{DnsProvider, DnsRecord, RecordContent, RecordPayload, Zone};
