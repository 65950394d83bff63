//! Request dispatching: the HTTP client, request pacing and status classification.
//!
//! The search configs in this crate only ever produce endpoint strings. Sending
//! them is the job of a [`Dispatcher`]; [`HttpClient`] is the implementation that
//! talks to the real API.
//!
//! - **HTTP Client**: one shared, lazily built `reqwest` client with connection
//!   pooling and compression, or a dedicated one when [`ClientConfig`] asks for a
//!   different timeout or user agent
//! - **Rate Limiting**: a minimum spacing between requests, shared by every clone
//!   of a client
//! - **Classification**: 404 becomes [`Error::NotFound`], 429 becomes
//!   [`Error::RateLimit`], any other non-2xx becomes [`Error::Http`]
//!
//! Failed requests are not retried.
//!
//! # Examples
//!
//! ```rust
//! use shiori::net::HttpClient;
//!
//! # async fn example() -> shiori::Result<()> {
//! let client = HttpClient::new();
//! let body: serde_json::Value = client.get_json("/anime/1").await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::{Error, Result};

mod config;

pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_MS,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Shared HTTP client for the default configuration.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    build_client(
        DEFAULT_USER_AGENT,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    )
    .expect("Failed to build HTTP client")
});

fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()?)
}

/// Sends an endpoint (`/path?query`) to the API and returns the raw body.
///
/// Implementations perform at most one request per call and report failures
/// through [`Error`]. Tests can provide their own implementation to observe which
/// endpoints a [`JikanClient`](crate::client::JikanClient) asks for.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Fetches `endpoint` and returns the response body.
    async fn fetch(&self, endpoint: &str) -> Result<Bytes>;
}

/// Enforces a minimum delay between consecutive requests.
///
/// Clones share the same schedule, so every handle to one client is paced
/// together. Each caller reserves the next free slot under the lock and then
/// sleeps until it arrives.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    next_slot: Arc<Mutex<Option<Instant>>>,
    delay: Duration,
}

impl RateLimiter {
    /// Creates a rate limiter with the given spacing in milliseconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::net::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(350);
    /// assert_eq!(limiter.delay().as_millis(), 350);
    /// ```
    pub fn new(delay_ms: u64) -> Self {
        Self::with_delay(Duration::from_millis(delay_ms))
    }

    /// Creates a rate limiter with the given spacing. [`Duration::ZERO`] never waits.
    ///
    /// ```rust
    /// use shiori::net::RateLimiter;
    /// use std::time::Duration;
    ///
    /// let limiter = RateLimiter::with_delay(Duration::from_secs(1));
    /// assert_eq!(limiter.delay(), Duration::from_secs(1));
    /// ```
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            next_slot: Arc::new(Mutex::new(None)),
            delay,
        }
    }

    /// Minimum spacing between two requests.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits until this caller may send its request.
    pub async fn wait(&self) {
        let now = Instant::now();
        let slot = {
            let mut next_slot = self.next_slot.lock();
            let slot = match *next_slot {
                Some(reserved) if reserved > now => reserved,
                _ => now,
            };
            *next_slot = Some(slot + self.delay);
            slot
        };

        if slot > now {
            let pause = slot - now;
            trace!(wait_ms = pause.as_millis() as u64, "rate limiter pausing");
            tokio::time::sleep(pause).await;
        }
    }
}

/// HTTP dispatcher for the Jikan API.
///
/// # Examples
///
/// ```rust
/// use shiori::net::{ClientConfigBuilder, HttpClient};
///
/// # fn example() -> shiori::Result<()> {
/// let config = ClientConfigBuilder::default()
///     .base_url("http://localhost:8080/v4/")
///     .build()?;
/// let client = HttpClient::with_config(&config)?;
///
/// assert_eq!(client.url_for("/anime?page=2"), "http://localhost:8080/v4/anime?page=2");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    /// Creates a client for the public API with default settings.
    pub fn new() -> Self {
        Self {
            client: CLIENT.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
            rate_limiter: RateLimiter::new(DEFAULT_RATE_LIMIT_MS),
        }
    }

    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// * [`Error::Validation`] - If `base_url` is not an absolute http(s) URL
    /// * [`Error::Network`] - If the underlying HTTP client cannot be built
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::validation("base_url", e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::validation(
                "base_url",
                format!("unsupported scheme `{}`", base_url.scheme()),
            ));
        }

        let defaults = ClientConfig::default();
        let client = if config.user_agent == defaults.user_agent
            && config.timeout == defaults.timeout
        {
            CLIENT.clone()
        } else {
            build_client(&config.user_agent, config.timeout)?
        };

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::with_delay(config.rate_limit),
        })
    }

    /// API root without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and an endpoint.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Performs one GET request and classifies the response status.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFound`] - On 404
    /// * [`Error::RateLimit`] - On 429, carrying `Retry-After` seconds if present
    /// * [`Error::Http`] - On any other non-2xx status
    /// * [`Error::Network`] - For connection errors
    pub async fn get(&self, endpoint: &str) -> Result<Bytes> {
        let url = self.url_for(endpoint);
        self.rate_limiter.wait().await;

        debug!(%url, "dispatching request");
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.bytes().await?);
        }

        warn!(status = status.as_u16(), %url, "request failed");
        match status {
            StatusCode::NOT_FOUND => Err(Error::not_found(endpoint)),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse::<u64>().ok());
                Err(Error::rate_limit(retry_after))
            }
            _ => Err(Error::http(status.as_u16(), url)),
        }
    }

    /// Performs a GET request and deserializes the body as JSON.
    pub async fn get_json<T>(&self, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.get(endpoint).await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dispatcher for HttpClient {
    async fn fetch(&self, endpoint: &str) -> Result<Bytes> {
        self.get(endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_handles_slashes() {
        let client = HttpClient::new();
        assert_eq!(
            client.url_for("/anime?q=x"),
            "https://api.jikan.moe/v4/anime?q=x"
        );
        assert_eq!(client.url_for("anime"), "https://api.jikan.moe/v4/anime");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        let error = HttpClient::with_config(&config).unwrap_err();
        assert_eq!(error.field(), Some("base_url"));

        let ftp = ClientConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(HttpClient::with_config(&ftp).is_err());
    }

    #[tokio::test]
    async fn rate_limiter_spaces_requests() {
        let limiter = RateLimiter::new(40);
        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(80));
    }

    #[tokio::test]
    async fn clones_share_the_schedule() {
        let limiter = RateLimiter::new(40);
        let other = limiter.clone();
        let start = Instant::now();
        limiter.wait().await;
        other.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn zero_delay_never_waits() {
        let limiter = RateLimiter::with_delay(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..5 {
            limiter.wait().await;
        }
        assert!(start.elapsed() < Duration::from_millis(40));
    }
}
