//! Basic-Auth credential construction.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::HeaderValue;
use romm_shared::BASIC_PREFIX;

use crate::error::CatalogError;

/// Builds the `Authorization` header value for `username:password`.
///
/// Runs before any network I/O so an encoding failure never reaches the
/// transport. The returned value is marked sensitive.
pub fn basic_authorization(username: &str, password: &str) -> Result<HeaderValue, CatalogError> {
    let raw_len = username.len() + 1 + password.len();
    let encoded_len = base64::encoded_len(raw_len, true).ok_or_else(|| {
        CatalogError::AuthEncoding(format!("credentials too long ({} bytes)", raw_len))
    })?;

    let mut credentials = String::new();
    credentials
        .try_reserve_exact(raw_len)
        .map_err(|e| CatalogError::AuthEncoding(e.to_string()))?;
    credentials.push_str(username);
    credentials.push(':');
    credentials.push_str(password);

    let mut value = String::new();
    value
        .try_reserve_exact(BASIC_PREFIX.len() + encoded_len)
        .map_err(|e| CatalogError::AuthEncoding(e.to_string()))?;
    value.push_str(BASIC_PREFIX);
    STANDARD.encode_string(credentials.as_bytes(), &mut value);

    let mut header =
        HeaderValue::from_str(&value).map_err(|e| CatalogError::AuthEncoding(e.to_string()))?;
    header.set_sensitive(true);
    Ok(header)
}
