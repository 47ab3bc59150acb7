//! Test doubles and common utilities for pipeline contract tests
//!
//! Provides a call-recording fake provider so the pipeline can be driven
//! end to end without any network.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use dynup_core::error::{Error, Result};
use dynup_core::traits::{DnsProvider, DnsRecord, RecordPayload, Zone};
use dynup_core::Credentials;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// One recorded write call (create or update)
#[derive(Debug, Clone, PartialEq)]
pub enum WriteCall {
    Create {
        zone_id: String,
        payload: serde_json::Value,
    },
    Update {
        zone_id: String,
        record_id: String,
        payload: serde_json::Value,
    },
}

/// A fake DnsProvider serving canned zones/records and recording writes
pub struct FakeDnsProvider {
    zones: Vec<Zone>,
    records: HashMap<String, Vec<DnsRecord>>,
    writes: Arc<Mutex<Vec<WriteCall>>>,
    fail_writes: bool,
}

impl FakeDnsProvider {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones,
            records: HashMap::new(),
            writes: Arc::new(Mutex::new(Vec::new())),
            fail_writes: false,
        }
    }

    /// Seed the records listed for a zone
    pub fn with_records(mut self, zone_id: &str, records: Vec<DnsRecord>) -> Self {
        self.records.insert(zone_id.to_string(), records);
        self
    }

    /// Make create/update calls fail like a provider outage
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Handle to the recorded write calls, usable after the provider is
    /// boxed into the pipeline
    pub fn writes_handle(&self) -> Arc<Mutex<Vec<WriteCall>>> {
        Arc::clone(&self.writes)
    }
}

#[async_trait]
impl DnsProvider for FakeDnsProvider {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        Ok(self.zones.clone())
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>> {
        Ok(self.records.get(zone_id).cloned().unwrap_or_default())
    }

    async fn create_record(&self, zone_id: &str, payload: &RecordPayload) -> Result<()> {
        if self.fail_writes {
            return Err(Error::provider("fake", "injected create failure"));
        }
        self.writes.lock().unwrap().push(WriteCall::Create {
            zone_id: zone_id.to_string(),
            payload: serde_json::to_value(payload).unwrap(),
        });
        Ok(())
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        payload: &RecordPayload,
    ) -> Result<()> {
        if self.fail_writes {
            return Err(Error::provider("fake", "injected update failure"));
        }
        self.writes.lock().unwrap().push(WriteCall::Update {
            zone_id: zone_id.to_string(),
            record_id: record_id.to_string(),
            payload: serde_json::to_value(payload).unwrap(),
        });
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// Expected credentials used across the contract tests
pub fn test_credentials() -> Credentials {
    Credentials::new("router", "hunter2")
}

/// A well-formed `Authorization` header for the test credentials
pub fn authorized_header() -> String {
    basic_header("router", "hunter2")
}

/// Build a Basic header for arbitrary credentials
pub fn basic_header(user: &str, pass: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{user}:{pass}")))
}

/// Build a query parameter map from pairs
pub fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A zone literal for test fixtures
pub fn zone(id: &str, name: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// A record literal for test fixtures
pub fn record(id: &str, name: &str, record_type: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        name: name.to_string(),
        record_type: record_type.to_string(),
        content: content.to_string(),
        ttl: 300,
        proxied: false,
    }
}
