//! Shared helpers for provider implementations

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Creates an HTTP client with the default timeouts.
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::Unknown {
            provider: provider.to_string(),
            raw_message: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URL handling ============

/// Strips trailing slashes so paths can be appended with a single `/`.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:8080/api//"),
            "http://localhost:8080/api"
        );
        assert_eq!(normalize_base_url("http://x"), "http://x");
    }

    #[test]
    fn create_http_client_succeeds() {
        assert!(create_http_client("test").is_ok());
    }
}
