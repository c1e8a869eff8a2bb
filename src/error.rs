use thiserror::Error;

#[derive(Error, Debug)]
pub enum BdbctlError {
    #[error("{} environment variable(s) must be set", .0.join(", "))]
    MissingEnv(Vec<&'static str>),

    #[error("HTTP {status}: {body}")]
    Client { status: u16, body: String },

    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response is missing the '{0}' field")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, BdbctlError>;
