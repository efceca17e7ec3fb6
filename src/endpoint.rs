//! Inference endpoint address normalization.
//!
//! The settings field accepts anything from a bare `host:port` to a full
//! URL. Normalization rule, in order:
//!   1. trim surrounding whitespace
//!   2. strip an optional `<scheme>://` prefix
//!   3. drop any query string or fragment
//!   4. split the remainder into authority (up to the first `/`) and path
//!   5. trim trailing slashes from the path
//!   6. result is `http://<authority><path>/api/generate`
//!
//! The authority must be non-empty and free of whitespace; anything else is
//! an `InvalidEndpoint` failure. A path segment in the input is preserved,
//! so `http://localhost:11434/somepath` resolves to
//! `http://localhost:11434/somepath/api/generate`.

use crate::error::AnalysisError;
use regex::Regex;

/// Path of the generate endpoint, appended to every normalized address.
pub const GENERATE_PATH: &str = "/api/generate";

/// Normalize a configured address into the full generate endpoint URL.
pub fn normalize_address(address: &str) -> Result<String, AnalysisError> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidEndpoint("address is empty".to_string()));
    }

    let scheme = Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").expect("static pattern");
    let without_scheme = scheme.replace(trimmed, "");
    let rest = without_scheme.split(['?', '#']).next().unwrap_or("");

    let (authority, path) = match rest.find('/') {
        Some(slash) => rest.split_at(slash),
        None => (rest, ""),
    };

    if authority.is_empty() || authority.chars().any(char::is_whitespace) {
        return Err(AnalysisError::InvalidEndpoint(format!(
            "no usable authority in {:?}",
            address
        )));
    }

    let path = path.trim_end_matches('/');
    Ok(format!("http://{}{}{}", authority, path, GENERATE_PATH))
}
