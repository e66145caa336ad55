//! Best-effort decoding of access token claims for display.
//!
//! The middle segment of a JWT is base64url-encoded JSON. Nothing here checks
//! a signature or an expiry; claims are shown to the user and never used for
//! access decisions. Any token that is not a readable JWT simply has no
//! claims, which is an expected outcome rather than an error.

use base64::{
    Engine,
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
};
use serde_json::{Map, Value};

/// Claims decoded from an access token payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Claims {
    inner: Map<String, Value>,
}

impl Claims {
    /// Gets a claim as a non-empty string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.get_str("email")
    }

    /// Best display name: `name`, then `preferred_username`, then `sub`.
    pub fn display_name(&self) -> Option<&str> {
        self.get_str("name")
            .or_else(|| self.get_str("preferred_username"))
            .or_else(|| self.get_str("sub"))
    }

    /// The `exp` claim as Unix seconds.
    pub fn expires_at(&self) -> Option<i64> {
        self.inner.get("exp").and_then(Value::as_i64)
    }

    /// Indented JSON for the claims panel.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.inner).unwrap_or_default()
    }
}

/// Decodes the payload segment of `token`.
///
/// Returns `None` for anything that is not `header.payload[.signature]` with a
/// base64 JSON object in the middle. Padding and the standard alphabet are
/// tolerated since some issuers emit them.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.trim().split('.');
    let _header = segments.next()?;
    let payload = segments.next()?.trim_end_matches('=');
    if payload.is_empty() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;

    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(inner) => Some(Claims { inner }),
        _ => None,
    }
}
