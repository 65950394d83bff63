//! Client configuration.
//!
//! [`ClientConfig`] carries everything the HTTP dispatcher needs: where the API
//! lives, how to identify ourselves, and how politely to pace requests. Values can
//! be set through [`ClientConfigBuilder`] or overridden from the environment with
//! [`ClientConfig::from_env`].
//!
//! | Variable | Field | Unit |
//! |----------|-------|------|
//! | `SHIORI_BASE_URL` | `base_url` | URL |
//! | `SHIORI_TIMEOUT_SECS` | `timeout` | seconds |
//! | `SHIORI_RATE_LIMIT_MS` | `rate_limit` | milliseconds |

use std::env;
use std::time::Duration;

use derive_builder::Builder;

use crate::error::{Error, Result};

/// Public Jikan v4 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Jikan allows three requests per second; stay a little under that.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 350;

/// Whole-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sent as `User-Agent` unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = concat!("Shiori/", env!("CARGO_PKG_VERSION"));

const BASE_URL_VAR: &str = "SHIORI_BASE_URL";
const TIMEOUT_VAR: &str = "SHIORI_TIMEOUT_SECS";
const RATE_LIMIT_VAR: &str = "SHIORI_RATE_LIMIT_MS";

/// Settings for [`HttpClient`](super::HttpClient).
///
/// # Examples
///
/// ```rust
/// use shiori::net::ClientConfigBuilder;
/// use std::time::Duration;
///
/// let config = ClientConfigBuilder::default()
///     .base_url("http://localhost:8080/v4")
///     .rate_limit(Duration::ZERO)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct ClientConfig {
    /// API root. Endpoints are appended to it.
    #[builder(setter(into))]
    pub base_url: String,

    /// `User-Agent` header sent with every request.
    #[builder(setter(into))]
    pub user_agent: String,

    /// Whole-request timeout.
    pub timeout: Duration,

    /// Minimum spacing between two requests.
    pub rate_limit: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            rate_limit: Duration::from_millis(DEFAULT_RATE_LIMIT_MS),
        }
    }
}

impl ClientConfig {
    /// Starts from the defaults and applies any `SHIORI_*` overrides.
    ///
    /// Unset variables keep their default. A variable that is set but not a whole
    /// number is reported as a validation error naming the variable.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(secs) = read_number(TIMEOUT_VAR)? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(millis) = read_number(RATE_LIMIT_VAR)? {
            config.rate_limit = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

fn read_number(var: &str) -> Result<Option<u64>> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| Error::validation(var, format!("expected a whole number, got {:?}", raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_jikan() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.jikan.moe/v4");
        assert_eq!(config.rate_limit, Duration::from_millis(350));
        assert!(config.user_agent.starts_with("Shiori/"));
    }

    #[test]
    fn builder_keeps_unset_defaults() {
        let config = ClientConfigBuilder::default()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn numbers_are_read_from_the_environment() {
        // SAFETY: no other test reads or writes these variables.
        unsafe {
            env::set_var("SHIORI_TEST_NUMBER_OK", " 42 ");
            env::set_var("SHIORI_TEST_NUMBER_BAD", "soon");
        }

        assert_eq!(read_number("SHIORI_TEST_NUMBER_OK").unwrap(), Some(42));
        assert_eq!(read_number("SHIORI_TEST_NUMBER_UNSET").unwrap(), None);

        let error = read_number("SHIORI_TEST_NUMBER_BAD").unwrap_err();
        assert_eq!(error.field(), Some("SHIORI_TEST_NUMBER_BAD"));
    }
}
