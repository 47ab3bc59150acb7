//! Configuration types for the update endpoint
//!
//! The expected Basic-auth credentials and the record defaults written to
//! the provider. Secrets are loaded by the daemon from the environment and
//! are immutable for the process lifetime.

/// TTL written on every created or updated record, in seconds
pub const RECORD_TTL: u32 = 300;

/// Records are never put behind the provider's proxy
pub const RECORD_PROXIED: bool = false;

/// Expected Basic-auth credentials for inbound update requests
#[derive(Clone)]
pub struct Credentials {
    /// Expected username
    pub username: String,
    /// Expected password
    /// ⚠️ NEVER log this value
    pub password: String,
}

impl Credentials {
    /// Create credentials from the configured username and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validate the credentials
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.username.is_empty() {
            return Err(crate::Error::config("username cannot be empty"));
        }
        if self.password.is_empty() {
            return Err(crate::Error::config("password cannot be empty"));
        }
        Ok(())
    }
}

// Custom Debug implementation that hides the password
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}
