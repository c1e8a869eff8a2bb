pub mod types;

use crate::error::{BdbctlError, Result};
use types::{Config, Credentials};

pub const API_URL: &str = "API_URL";
pub const API_USER: &str = "API_USER";
pub const API_PASSWORD: &str = "API_PASSWORD";

/// Load config from the process environment.
pub fn load_config() -> Result<Config> {
    load_config_from(|name| std::env::var(name).ok())
}

/// Load config through an arbitrary variable lookup.
///
/// Every required variable is checked before failing so the error names
/// all of the missing ones. Empty values count as missing.
pub fn load_config_from<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

    match (read(API_URL), read(API_USER), read(API_PASSWORD)) {
        (Some(base_url), Some(username), Some(password)) => {
            Ok(Config::new(base_url, Credentials::new(username, password)))
        }
        (base_url, username, password) => {
            let missing = [
                (API_URL, base_url.is_none()),
                (API_USER, username.is_none()),
                (API_PASSWORD, password.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            Err(BdbctlError::MissingEnv(missing))
        }
    }
}
