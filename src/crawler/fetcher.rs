//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client with the browser user agent
//! - GET requests with optional per-request timeouts
//! - Retry with exponential backoff on HTTP 429
//! - Error classification (not found, other status, network)

use crate::config::HttpConfig;
use crate::FetchError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use tcg_catalog::config::HttpConfig;
/// use tcg_catalog::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page fetcher shared by every storefront crawl
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 2xx | Return body |
/// | HTTP 429 | Retry up to `max_attempts` total, delay doubles from `backoff_base` |
/// | HTTP 404 | Immediate → `FetchError::NotFound` |
/// | Other status | Immediate → `FetchError::Status` |
/// | Network error / timeout | Immediate → `FetchError::Http` |
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_attempts: u32,
    backoff_base: Duration,
}

impl Fetcher {
    /// Creates a fetcher around an existing client
    pub fn new(client: Client, config: &HttpConfig) -> Self {
        Self {
            client,
            max_attempts: config.max_attempts.max(1),
            backoff_base: Duration::from_millis(config.backoff_base_ms),
        }
    }

    /// Fetches `url` and returns the response body as text
    ///
    /// `timeout` overrides the client's default request timeout for this call.
    pub async fn fetch(&self, url: &str, timeout: Option<Duration>) -> Result<String, FetchError> {
        let mut backoff = self.backoff_base;

        for attempt in 1..=self.max_attempts {
            let mut request = self.client.get(url);
            if let Some(timeout) = timeout {
                request = request.timeout(timeout);
            }

            let response = request.send().await.map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt < self.max_attempts {
                    tracing::warn!(
                        "[429] {}, retrying in {:?} (#{})",
                        url,
                        backoff,
                        attempt
                    );
                    tokio::time::sleep(backoff).await;
                    backoff = backoff.saturating_mul(2);
                }
                continue;
            }

            if status == StatusCode::NOT_FOUND {
                return Err(FetchError::NotFound {
                    url: url.to_string(),
                });
            }

            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            return response.text().await.map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            });
        }

        Err(FetchError::RateLimited {
            url: url.to_string(),
            attempts: self.max_attempts,
        })
    }
}
