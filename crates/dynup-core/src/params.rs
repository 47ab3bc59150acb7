//! Query parameter validation
//!
//! An update request carries exactly two parameters: `hostname` and `myip`.
//! Presence is the only check here; the hostname passes through unchanged
//! (casing and trailing dots included) and `myip` is classified later by
//! [`crate::addr`].

use std::collections::HashMap;

use crate::error::{Error, Result};

/// The validated parameters of one update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateParams {
    /// The hostname whose record should be updated
    pub hostname: String,
    /// The claimed IP address, still a raw string at this point
    pub myip: String,
}

/// Extract `hostname` and `myip` from the query parameters, failing with
/// the name of the first missing parameter.
pub fn validate(query: &HashMap<String, String>) -> Result<UpdateParams> {
    let hostname = query
        .get("hostname")
        .ok_or(Error::MissingParameter("hostname"))?;
    let myip = query.get("myip").ok_or(Error::MissingParameter("myip"))?;

    Ok(UpdateParams {
        hostname: hostname.clone(),
        myip: myip.clone(),
    })
}
