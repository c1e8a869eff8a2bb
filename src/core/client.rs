use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::auth::basic_auth_header;
use super::request::{ApiRequest, Method, RawResponse};
use super::transport::{HttpTransport, Transport};
use crate::config::types::{ApiVersion, Config};
use crate::error::{BdbctlError, Result};

/// The single path through which every management API call flows.
///
/// Owns the base URL, the precomputed auth header and the API version.
pub struct ApiClient<T = HttpTransport> {
    base_url: String,
    auth_header: String,
    api_version: ApiVersion,
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config.tls)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: &Config, transport: T) -> Self {
        Self {
            base_url: config.base_url.clone(),
            auth_header: basic_auth_header(&config.credentials),
            api_version: config.api_version,
            transport,
        }
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::Get, path, None)
    }

    pub fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_value(body)?;
        self.send(Method::Post, path, Some(body))
    }

    pub fn delete(&self, path: &str) -> Result<Value> {
        self.send(Method::Delete, path, None)
    }

    /// Send one request and parse the JSON reply.
    ///
    /// Any status of 400 or above becomes an error carrying the status and
    /// the body text. An empty success body parses as `null`.
    pub fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: vec![
                ("Authorization", self.auth_header.clone()),
                ("Content-Type", "application/json".to_string()),
            ],
            body,
        };

        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.send(&request)?;
        debug!(status = response.status, "response received");

        parse_response(response)
    }
}

fn parse_response(response: RawResponse) -> Result<Value> {
    let RawResponse { status, body } = response;
    match status {
        400..=499 => Err(BdbctlError::Client { status, body }),
        500.. => Err(BdbctlError::Server { status, body }),
        _ if body.trim().is_empty() => Ok(Value::Null),
        _ => Ok(serde_json::from_str(&body)?),
    }
}
