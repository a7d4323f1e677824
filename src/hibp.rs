//! HTTP range source backed by `reqwest`.

use std::time::Duration;

use crate::breach::{BreachError, RangeSource};
use crate::config::Settings;

/// Range-query client for a Pwned Passwords compatible service.
///
/// ```rust,no_run
/// use pwd_exposure::{analyze, BreachChecker, HibpClient, Settings};
/// use secrecy::SecretString;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let password = SecretString::new("MyP@ssw0rd!".to_string().into());
/// let analysis = analyze(&password);
///
/// let checker = BreachChecker::new(HibpClient::new(&Settings::from_env()?)?);
/// let verdict = checker.screen(&password, &analysis).await?;
/// println!("{:?}", verdict);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HibpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HibpClient {
    /// Builds a client from `settings` (endpoint, timeout, user agent).
    pub fn new(settings: &Settings) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| BreachError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, &settings.range_endpoint))
    }

    /// Uses an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Client against `endpoint` with default timeout and user agent.
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self, BreachError> {
        Self::new(&Settings {
            range_endpoint: endpoint.to_string(),
            request_timeout: timeout,
            ..Settings::default()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.endpoint, prefix)
    }
}

impl RangeSource for HibpClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = self.range_url(prefix);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BreachError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!("range service answered {} for prefix {}", status, prefix);
            return Err(BreachError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| BreachError::Transport(e.to_string()))
    }
}
