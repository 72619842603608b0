//! Configuration error types.
//!
//! Errors raised while building a [`Client`](crate::Client), before any
//! request is made. Request-time errors live in [`crate::client::Error`].

use thiserror::Error;

/// Errors that can occur while configuring a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API version string is not in `YYYY-MM` form.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g. '2022-01').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Base URL override is not a valid URL.
    #[error("Invalid base URL '{url}'. Please provide a scheme and host (e.g. 'https://theshop.myshoplaza.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
