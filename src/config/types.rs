use std::fmt;

use serde::Serialize;

/// Resolved runtime configuration. Built once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
    pub api_version: ApiVersion,
    pub tls: TlsPolicy,
}

impl Config {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            api_version: ApiVersion::default(),
            tls: TlsPolicy::default(),
        }
    }

    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn with_tls(mut self, tls: TlsPolicy) -> Self {
        self.tls = tls;
        self
    }
}

/// Basic-auth credentials. The password never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Backend API generation. Selects endpoint paths, identifier field names
/// and request payload shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Unversioned paths, `id` identifiers
    #[default]
    Legacy,
    /// `/v1/` prefixed paths, `uid` identifiers
    V1,
}

impl ApiVersion {
    pub fn databases_path(&self) -> &'static str {
        match self {
            Self::Legacy => "/databases",
            Self::V1 => "/v1/bdbs",
        }
    }

    pub fn users_path(&self) -> &'static str {
        match self {
            Self::Legacy => "/users",
            Self::V1 => "/v1/users",
        }
    }

    /// Name of the identifier field in a created database.
    pub fn id_field(&self) -> &'static str {
        match self {
            Self::Legacy => "id",
            Self::V1 => "uid",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsPolicy {
    #[default]
    Verify,
    AcceptInvalidCerts,
}
