//! Runtime settings.
//!
//! Defaults can be overridden through environment variables:
//!
//! - `PWD_RANGE_ENDPOINT`: base URL of the range-query service
//! - `PWD_RANGE_TIMEOUT_MS`: request timeout in milliseconds
//! - `PWD_DEBOUNCE_MS`: quiescence window before a breach check fires
//! - `PWD_DENYLIST_PATH`: extra denylist file merged into the built-in one

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const ENV_RANGE_ENDPOINT: &str = "PWD_RANGE_ENDPOINT";
pub const ENV_RANGE_TIMEOUT_MS: &str = "PWD_RANGE_TIMEOUT_MS";
pub const ENV_DEBOUNCE_MS: &str = "PWD_DEBOUNCE_MS";
pub const ENV_DENYLIST_PATH: &str = "PWD_DENYLIST_PATH";

pub const DEFAULT_RANGE_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(750);
pub const DEFAULT_USER_AGENT: &str = concat!("pwd-exposure/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL; the hash prefix is appended as a final path segment.
    pub range_endpoint: String,
    pub request_timeout: Duration,
    /// Quiet period required before a debounced breach check fires.
    pub quiescence: Duration,
    pub user_agent: String,
    pub denylist_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            range_endpoint: DEFAULT_RANGE_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            quiescence: DEFAULT_QUIESCENCE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            denylist_path: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by whichever environment variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(endpoint) = read_var(ENV_RANGE_ENDPOINT) {
            let endpoint = endpoint.trim().trim_end_matches('/');
            if endpoint.is_empty() {
                return Err(ConfigError::Empty {
                    var: ENV_RANGE_ENDPOINT,
                });
            }
            settings.range_endpoint = endpoint.to_string();
        }
        if let Some(timeout) = read_millis(ENV_RANGE_TIMEOUT_MS)? {
            settings.request_timeout = timeout;
        }
        if let Some(quiescence) = read_millis(ENV_DEBOUNCE_MS)? {
            settings.quiescence = quiescence;
        }
        settings.denylist_path = read_var(ENV_DENYLIST_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        #[cfg(feature = "tracing")]
        tracing::debug!("settings loaded: {:?}", settings);

        Ok(settings)
    }
}

fn read_var(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

fn read_millis(var: &'static str) -> Result<Option<Duration>, ConfigError> {
    let Some(value) = read_var(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|_| ConfigError::InvalidNumber { var, value })
}
