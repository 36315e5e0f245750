//! HTTP client initialization.

use std::time::Duration;

use crate::config::{Config, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client shared by every lookup.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - A default timeout; individual lookups set their own provider timeout
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
