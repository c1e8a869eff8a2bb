use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::config::types::Credentials;

/// Build the `Authorization` header value for HTTP Basic auth.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password());
    format!("Basic {}", STANDARD.encode(raw.as_bytes()))
}
