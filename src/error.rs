//! Error types and result handling for Shiori operations.
//!
//! This module defines the error handling system used throughout Shiori.
//! All operations return a [`Result<T>`] which is a type alias for `std::result::Result<T, Error>`.
//!
//! # Error Categories
//!
//! Shiori errors fall into two families:
//!
//! - **Validation Errors**: raised while a search config is turned into a query string,
//!   before any request is sent. They name the offending field and are never worth retrying.
//! - **Request Errors**: raised by the dispatcher once a request is on the wire: connection
//!   issues, HTTP status failures (not found, rate limited, anything else non-2xx) and
//!   payloads that cannot be decoded.
//!
//! # Examples
//!
//! ```rust
//! use shiori::prelude::*;
//! use shiori::error::Error;
//!
//! let config = AnimeSearchConfig {
//!     page: Some(0),
//!     ..Default::default()
//! };
//!
//! match config.to_query() {
//!     Ok(query) => println!("?{}", query),
//!     Err(Error::Validation { field, reason }) => println!("{field}: {reason}"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Type alias for Results with Shiori errors.
///
/// All public APIs in Shiori return this Result type.
///
/// # Examples
///
/// ```rust
/// use shiori::{Result, Error};
///
/// fn example_operation() -> Result<String> {
///     Ok("Success".to_string())
/// }
///
/// fn example_with_error() -> Result<()> {
///     Err(Error::validation("page", "must be greater than zero"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all Shiori operations.
///
/// # Variants
///
/// * [`Validation`](Error::Validation) - Invalid search option, raised before any request
/// * [`Network`](Error::Network) - HTTP client and connection errors
/// * [`NotFound`](Error::NotFound) - The API answered 404 for the requested resource
/// * [`RateLimit`](Error::RateLimit) - The API answered 429
/// * [`Http`](Error::Http) - Any other non-2xx response
/// * [`Json`](Error::Json) - Response payload could not be decoded
#[derive(Error, Debug)]
pub enum Error {
    /// A search option failed its precondition check.
    ///
    /// Validation happens synchronously while the query string is composed, so a
    /// configuration that produces this error never reaches the network. The first
    /// invalid field aborts composition; later fields are not inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::Error;
    ///
    /// let error = Error::validation("limit", "must be at most 25, got 50");
    /// assert!(error.is_validation());
    /// ```
    #[error("Invalid value for `{field}`: {reason}")]
    Validation { field: String, reason: String },

    /// Network-related errors from HTTP operations.
    ///
    /// This variant wraps errors from the underlying HTTP client (reqwest),
    /// including connection timeouts, DNS resolution failures, and TLS errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The requested resource does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::Error;
    ///
    /// let error = Error::not_found("/anime/999999999");
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API throttled the request.
    ///
    /// Carries the `Retry-After` value when the API sent one. Shiori does not
    /// retry on its own; callers decide whether and when to try again.
    #[error("Rate limited, retry after {retry_after:?} seconds")]
    RateLimit { retry_after: Option<u64> },

    /// Any other non-2xx HTTP response.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// JSON deserialization errors.
    ///
    /// This variant wraps errors from serde_json when a response body does not
    /// match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a validation error for the given field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::Error;
    ///
    /// let error = Error::validation("letter", "must be a single letter, got '1'");
    /// assert_eq!(error.field(), Some("letter"));
    /// ```
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a not found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Creates a rate limit error with optional retry-after time.
    ///
    /// The retry-after parameter typically comes from the `Retry-After` HTTP header.
    pub fn rate_limit(retry_after: Option<u64>) -> Self {
        Error::RateLimit { retry_after }
    }

    /// Creates an HTTP status error for the given URL.
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        Error::Http {
            status,
            url: url.into(),
        }
    }

    /// Returns `true` for errors raised before any request was sent.
    ///
    /// Validation errors mean "fix the request"; everything else came from the
    /// request layer.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns the offending field name of a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Error::validation(err.field_name(), "field was never set")
    }
}
