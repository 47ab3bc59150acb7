//! Basic-auth verification for inbound update requests
//!
//! The `Authorization` header is handled raw so the pipeline can tell the
//! three failure modes apart: header absent, header malformed, credentials
//! wrong. Both the username and the password are compared in constant time
//! so a probing client learns nothing from response latency about how much
//! of a guess was correct.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::config::Credentials;
use crate::error::{Error, Result};

/// Verify the raw `Authorization` header value against the expected
/// credentials.
///
/// Returns:
/// - `Err(Error::AuthMissing)` if the header is absent
/// - `Err(Error::AuthMalformed)` if it is not of the form `Basic <base64>`
///   or the token does not decode to `user:pass`
/// - `Err(Error::AuthInvalid)` if the decoded credentials do not match
///
/// Passwords may contain colons: only the first colon separates the
/// username from the password.
///
/// Callers mapping `AuthMissing`/`AuthInvalid` to a response must attach a
/// `WWW-Authenticate: Basic` challenge.
pub fn verify(header: Option<&str>, expected: &Credentials) -> Result<()> {
    let header = header.ok_or(Error::AuthMissing)?;

    let (scheme, token) = header.split_once(' ').ok_or(Error::AuthMalformed)?;
    if scheme != "Basic" || token.is_empty() {
        return Err(Error::AuthMalformed);
    }

    let decoded = BASE64.decode(token).map_err(|_| Error::AuthMalformed)?;
    let colon = decoded
        .iter()
        .position(|&b| b == b':')
        .ok_or(Error::AuthMalformed)?;
    let (username, password) = (&decoded[..colon], &decoded[colon + 1..]);

    // Evaluate both comparisons before branching so a username mismatch
    // costs the same as a password mismatch.
    let username_ok = constant_time_eq(username, expected.username.as_bytes());
    let password_ok = constant_time_eq(password, expected.password.as_bytes());
    if username_ok & password_ok {
        Ok(())
    } else {
        Err(Error::AuthInvalid)
    }
}

/// Constant-time byte comparison.
///
/// Accumulates a bitwise OR of per-byte XOR differences and only inspects
/// the accumulator after the full scan, so the running time does not depend
/// on *where* a mismatch occurs. The length check may short-circuit; length
/// is not a secret in this threat model.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
