//! HTTP client, query options, and the request-time error taxonomy.

mod errors;
mod http;
mod options;
mod response;

pub use errors::{Error, RateLimitError, ResponseDecodingError, ResponseError};
pub use http::{Client, ClientBuilder, USER_AGENT};
pub use options::{CountOptions, ListOptions};
