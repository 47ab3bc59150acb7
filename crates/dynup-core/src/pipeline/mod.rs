//! Core update pipeline
//!
//! The UpdatePipeline is responsible for:
//! - Verifying the caller's Basic-auth credentials
//! - Validating the `hostname`/`myip` parameters
//! - Resolving the owning zone and any existing record at the provider
//! - Deciding create vs. update and issuing the provider call
//!
//! ## Request Flow
//!
//! ```text
//! auth → validate → list_zones → owning_zone → classify(myip)
//!      → list_records → existing_record → create | update
//! ```
//!
//! Every arrow is a short-circuit failure exit; nothing persists between
//! requests. The provider calls are strictly sequential because each
//! step's input depends on the prior step's output; concurrent requests
//! for the same hostname may race at the provider, and no cross-request
//! locking is attempted here.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::addr::HostAddress;
use crate::auth;
use crate::config::{Credentials, RECORD_PROXIED, RECORD_TTL};
use crate::error::{Error, Result};
use crate::params;
use crate::resolve;
use crate::traits::{DnsProvider, RecordPayload};

/// Terminal outcome of a successful update request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No record existed at the hostname; one was created
    Created,
    /// An existing record was overwritten with the new address
    Updated,
}

/// The DDNS update pipeline
///
/// Owns the expected credentials and the injected provider; each call to
/// [`UpdatePipeline::handle`] runs one request end to end. The pipeline is
/// stateless across requests and safe to share behind an `Arc`.
pub struct UpdatePipeline {
    credentials: Credentials,
    provider: Box<dyn DnsProvider>,
}

impl UpdatePipeline {
    /// Create a pipeline from the expected credentials and a provider.
    pub fn new(credentials: Credentials, provider: Box<dyn DnsProvider>) -> Result<Self> {
        credentials.validate()?;
        Ok(Self {
            credentials,
            provider,
        })
    }

    /// Handle one update request.
    ///
    /// `authorization` is the raw `Authorization` header value, if any;
    /// `query` the request's query parameters. On success reports whether
    /// the record was created or updated; on failure returns the error
    /// the HTTP layer maps onto its response table.
    pub async fn handle(
        &self,
        authorization: Option<&str>,
        query: &HashMap<String, String>,
    ) -> Result<UpdateOutcome> {
        auth::verify(authorization, &self.credentials)?;
        let request = params::validate(query)?;

        debug!(
            hostname = %request.hostname,
            myip = %request.myip,
            "processing update request"
        );

        let zones = self.provider.list_zones().await?;
        let zone = resolve::owning_zone(&zones, &request.hostname)
            .ok_or_else(|| Error::ZoneNotFound(request.hostname.clone()))?;

        let address = HostAddress::classify(&request.myip)?;

        let records = self.provider.list_records(&zone.id).await?;
        let existing = resolve::existing_record(&records, &request.hostname);

        let payload = RecordPayload {
            name: resolve::relative_record_name(&request.hostname, &zone.name),
            ttl: RECORD_TTL,
            proxied: RECORD_PROXIED,
            content: address.into(),
        };

        match existing {
            None => {
                self.provider.create_record(&zone.id, &payload).await?;
                info!(
                    hostname = %request.hostname,
                    zone = %zone.name,
                    record_type = payload.content.record_type(),
                    content = %address.canonical(),
                    "DNS record created"
                );
                Ok(UpdateOutcome::Created)
            }
            Some(record) => {
                self.provider
                    .update_record(&zone.id, &record.id, &payload)
                    .await?;
                info!(
                    hostname = %request.hostname,
                    zone = %zone.name,
                    record_id = %record.id,
                    record_type = payload.content.record_type(),
                    content = %address.canonical(),
                    "DNS record updated"
                );
                Ok(UpdateOutcome::Updated)
            }
        }
    }
}
