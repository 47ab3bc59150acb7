//! Error types for the DDNS update pipeline
//!
//! Every variant maps 1:1 onto one HTTP response at the request boundary;
//! nothing here propagates beyond a single request.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DDNS update pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// No Authorization header on the request
    #[error("missing authorization header")]
    AuthMissing,

    /// Authorization header present but not `Basic <base64>`
    #[error("malformed authorization header")]
    AuthMalformed,

    /// Decoded credentials do not match the expected ones
    #[error("invalid credentials")]
    AuthInvalid,

    /// A required query parameter is absent
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// No zone owned by the account is a suffix of the hostname
    #[error("no zone found for hostname: {0}")]
    ZoneNotFound(String),

    /// `myip` is neither a valid IPv4 nor IPv6 literal
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider API call failed (network, HTTP status, malformed response)
    #[error("provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from a provider call (maps to a 500 at the
    /// HTTP boundary; everything else is a client error)
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::Provider { .. } | Self::Config(_))
    }
}
