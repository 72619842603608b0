//! Request-time error types.
//!
//! This module defines the error taxonomy surfaced by [`Client`](crate::Client)
//! operations:
//!
//! - [`ResponseError`]: a non-2xx response with a parseable error body
//! - [`RateLimitError`]: a 429 response, carrying the `Retry-After` value
//! - [`ResponseDecodingError`]: a body that could not be parsed as JSON
//! - [`Error`]: the unified error type returned by every operation
//!
//! Nothing is retried automatically; every failure is returned to the
//! immediate caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoplazza_api::client::Error;
//!
//! match client.products().get("1234", None).await {
//!     Ok(product) => println!("{:?}", product.title),
//!     Err(Error::RateLimit(e)) => println!("throttled, retry in {}s", e.retry_after),
//!     Err(Error::Response(e)) => println!("API error {}: {}", e.status, e),
//!     Err(other) => println!("request failed: {other}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// A non-2xx response from the API, normalized from the platform's error
/// body shapes (a flat message, a list of messages, or a map of field name
/// to messages).
///
/// `errors` preserves the order in which entries were encountered; the
/// rendered message sorts them only when no explicit message exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The primary error message, empty when the platform supplied none.
    pub message: String,
    /// Individual error strings, in the order they were encountered.
    pub errors: Vec<String>,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            return f.write_str(&self.message);
        }

        let mut sorted = self.errors.clone();
        sorted.sort();
        let joined = sorted.join(", ");

        if joined.is_empty() {
            f.write_str("Unknown Error")
        } else {
            f.write_str(&joined)
        }
    }
}

impl std::error::Error for ResponseError {}

/// A rate-limiting response (status 429).
///
/// Carries the underlying [`ResponseError`] so consumers can handle it like
/// any other response error, plus the number of seconds the platform asked
/// the caller to wait. This crate only surfaces the value; acting on it is
/// the caller's responsibility.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{response}")]
pub struct RateLimitError {
    /// The normalized response error.
    pub response: ResponseError,
    /// Seconds to wait before retrying, from the `Retry-After` header.
    /// Zero when the header is missing or unparsable.
    pub retry_after: u64,
}

/// A response body that could not be parsed where JSON was expected, either
/// while normalizing an error body or while decoding a success body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResponseDecodingError {
    /// The raw response body.
    pub body: Vec<u8>,
    /// The parse failure reason.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: u16,
}

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A network-level failure (connection refused, timeout, DNS failure).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-2xx response with a parseable (or empty) error body.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// A 429 rate-limiting response.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// A response body that was not valid JSON where JSON was expected.
    #[error(transparent)]
    Decoding(#[from] ResponseDecodingError),

    /// The request body or query options could not be encoded.
    /// Raised before any network call is made.
    #[error("Failed to encode request: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The relative path could not be resolved against the base URL.
    /// Raised before any network call is made.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}
