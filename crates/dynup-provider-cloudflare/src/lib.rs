// # Cloudflare DNS Provider
//
// Implements the `DnsProvider` trait against the Cloudflare API v4.
//
// - List Zones: GET `/zones`
// - List DNS Records: GET `/zones/:zone_id/dns_records`
// - Create DNS Record: POST `/zones/:zone_id/dns_records`
// - Update DNS Record: PUT `/zones/:zone_id/dns_records/:record_id`
//
// The provider is stateless and single-shot: one API call per trait
// method, full error propagation, no retry or backoff (a failed provider
// call is terminal for the request; the DDNS client retries on its own
// schedule), no caching between calls.
//
// ## Security
//
// - The API token NEVER appears in logs
// - The Debug implementation redacts the token
//
// ## API Reference
//
// - Cloudflare API v4: https://developers.cloudflare.com/api/

use async_trait::async_trait;
use dynup_core::error::{Error, Result};
use dynup_core::traits::{DnsProvider, DnsRecord, RecordPayload, Zone};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Cloudflare API base URL
const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Zones and records fetched per page; enough for the accounts this
/// endpoint serves, pagination is not followed
const PAGE_SIZE: u32 = 50;

/// Cloudflare API response envelope: `{ success, errors, result }`
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Cloudflare DNS provider
///
/// One instance per process; holds the API token and a pooled HTTP client.
pub struct CloudflareProvider {
    /// Cloudflare API token
    /// ⚠️ NEVER log this value
    api_token: String,

    /// API base URL; overridable so tests can point at a local server
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for CloudflareProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareProvider")
            .field("api_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CloudflareProvider {
    /// Create a new Cloudflare provider
    ///
    /// # Parameters
    ///
    /// - `api_token`: Cloudflare API token with Zone:Read and Zone:DNS:Edit
    ///   permissions
    ///
    /// # Errors
    ///
    /// Fails fast on an empty token or if the HTTP client cannot be built.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.is_empty() {
            return Err(Error::config("Cloudflare API token cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_token,
            base_url: CLOUDFLARE_API_BASE.to_string(),
            client,
        })
    }

    /// Point the provider at a different API base URL (tests only).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send a request, check the HTTP status, and unwrap the Cloudflare
    /// `{ success, errors, result }` envelope.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<T> {
        let response = request
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| Error::provider("cloudflare", format!("{what}: HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error response".to_string());
            return Err(Self::status_error(status, &body, what));
        }

        let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
            Error::provider("cloudflare", format!("{what}: failed to parse response: {e}"))
        })?;

        if !envelope.success {
            let detail = envelope
                .errors
                .iter()
                .map(|e| format!("{} (code {})", e.message, e.code))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::provider(
                "cloudflare",
                format!("{what}: API reported failure: {detail}"),
            ));
        }

        envelope.result.ok_or_else(|| {
            Error::provider("cloudflare", format!("{what}: response carried no result"))
        })
    }

    /// Map an unsuccessful HTTP status to a provider error
    fn status_error(status: reqwest::StatusCode, body: &str, what: &str) -> Error {
        match status.as_u16() {
            401 | 403 => Error::provider(
                "cloudflare",
                format!(
                    "{what}: authentication failed: invalid API token or insufficient permissions (status {status})"
                ),
            ),
            429 => Error::provider(
                "cloudflare",
                format!("{what}: rate limit exceeded (status {status})"),
            ),
            500..=599 => Error::provider(
                "cloudflare",
                format!("{what}: Cloudflare server error (transient): {status} - {body}"),
            ),
            _ => Error::provider(
                "cloudflare",
                format!("{what}: unexpected status {status} - {body}"),
            ),
        }
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    /// List the account's zones.
    ///
    /// ```http
    /// GET /zones?per_page=50
    /// Authorization: Bearer <token>
    /// ```
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        tracing::debug!("listing zones");
        let url = format!("{}/zones?per_page={}", self.base_url, PAGE_SIZE);
        self.dispatch(self.client.get(&url), "list zones").await
    }

    /// List all DNS records in a zone.
    ///
    /// ```http
    /// GET /zones/:zone_id/dns_records?per_page=50
    /// Authorization: Bearer <token>
    /// ```
    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>> {
        tracing::debug!(zone_id, "listing DNS records");
        let url = format!(
            "{}/zones/{}/dns_records?per_page={}",
            self.base_url, zone_id, PAGE_SIZE
        );
        self.dispatch(self.client.get(&url), "list records").await
    }

    /// Create a new record in the zone.
    ///
    /// ```http
    /// POST /zones/:zone_id/dns_records
    /// Authorization: Bearer <token>
    /// {"name": "home", "ttl": 300, "proxied": false, "type": "A", "content": "..."}
    /// ```
    async fn create_record(&self, zone_id: &str, payload: &RecordPayload) -> Result<()> {
        tracing::info!(zone_id, name = %payload.name, "creating DNS record");
        let url = format!("{}/zones/{}/dns_records", self.base_url, zone_id);
        let _: serde_json::Value = self
            .dispatch(self.client.post(&url).json(payload), "create record")
            .await?;
        Ok(())
    }

    /// Overwrite an existing record.
    ///
    /// ```http
    /// PUT /zones/:zone_id/dns_records/:record_id
    /// Authorization: Bearer <token>
    /// {"name": "home", "ttl": 300, "proxied": false, "type": "A", "content": "..."}
    /// ```
    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        payload: &RecordPayload,
    ) -> Result<()> {
        tracing::info!(zone_id, record_id, name = %payload.name, "updating DNS record");
        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.base_url, zone_id, record_id
        );
        let _: serde_json::Value = self
            .dispatch(self.client.put(&url).json(payload), "update record")
            .await?;
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }
}
