//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for the page fetch.
///
/// Applies the optional timeout and User-Agent from `config`. Left unset,
/// the client has no timeout and sends reqwest's default headers. Redirects
/// are followed with reqwest's default policy.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails (e.g., TLS backend
/// initialization).
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = ClientBuilder::new();
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    builder.build()
}
