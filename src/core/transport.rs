use std::time::Duration;

use tracing::warn;

use super::request::{ApiRequest, Method, RawResponse};
use crate::config::types::TlsPolicy;
use crate::error::{BdbctlError, Result};

/// Sends one request and hands back whatever the server answered.
///
/// Implementations do not interpret status codes; that is left to
/// [`ApiClient`](super::client::ApiClient).
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse>;
}

/// Blocking HTTP transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(tls: TlsPolicy) -> Result<Self> {
        // No timeout: a hung server blocks until the OS gives up.
        let mut builder = reqwest::blocking::Client::builder().timeout(None::<Duration>);

        if tls == TlsPolicy::AcceptInvalidCerts {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(BdbctlError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let transport_err = |source| BdbctlError::Transport {
            url: request.url.clone(),
            source,
        };

        let response = builder.send().map_err(transport_err)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_err)?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_verifying_transport() {
        assert!(HttpTransport::new(TlsPolicy::Verify).is_ok());
    }

    #[test]
    fn builds_transport_accepting_invalid_certs() {
        assert!(HttpTransport::new(TlsPolicy::AcceptInvalidCerts).is_ok());
    }

    #[test]
    fn refused_connection_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/users", listener.local_addr().unwrap());
        drop(listener);

        let transport = HttpTransport::new(TlsPolicy::Verify).unwrap();
        let request = ApiRequest {
            method: Method::Get,
            url: url.clone(),
            headers: Vec::new(),
            body: None,
        };
        let err = transport.send(&request).unwrap_err();

        assert!(matches!(&err, BdbctlError::Transport { url: failed, .. } if *failed == url));
        assert_eq!(err.to_string(), format!("request to {url} failed"));
    }
}
