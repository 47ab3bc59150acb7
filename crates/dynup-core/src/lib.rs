// # dynup-core
//
// Core library for the dynup DDNS update endpoint.
//
// A single authenticated HTTP request carries a `hostname` and a claimed
// IP address (`myip`); this library turns it into a create-or-update of
// the matching A/AAAA record at the DNS provider.
//
// ## Architecture Overview
//
// - **auth**: Basic-auth verification with constant-time comparison
// - **params**: `hostname`/`myip` query parameter validation
// - **addr**: IPv4/IPv6 classification and canonicalization
// - **resolve**: owning-zone and existing-record resolution
// - **DnsProvider**: trait for the provider API (list/create/update)
// - **UpdatePipeline**: orchestrates the full request flow
//
// ## Design Principles
//
// 1. **Separation of Concerns**: the pipeline never talks HTTP or touches
//    the network directly; the provider is injected behind a trait
// 2. **Stateless**: every request builds, uses, and discards its own view
//    of zones and records; the provider is the sole source of truth
// 3. **Library-First**: the whole pipeline is testable with a fake provider

pub mod addr;
pub mod auth;
pub mod config;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod resolve;
pub mod traits;

// Re-export core types for convenience
pub use addr::HostAddress;
pub use config::Credentials;
pub use error::{Error, Result};
pub use pipeline::{UpdateOutcome, UpdatePipeline};
pub use traits::{DnsProvider, DnsRecord, RecordContent, RecordPayload, Zone};
