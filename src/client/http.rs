//! The Shoplazza API client.
//!
//! [`Client`] owns the resolved base URL, the API path prefix, and the
//! authentication mode, all fixed at construction. It builds outbound
//! requests (URL resolution, query encoding, JSON bodies, auth headers),
//! sends them over a shared [`reqwest::Client`], and normalizes failure
//! responses via [`super::response`].
//!
//! # Thread Safety
//!
//! `Client` is `Send + Sync` and logically read-only after construction, so
//! a single instance can be shared across async tasks. Each shop needs its
//! own client, since the base URL is per-store.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoplazza_api::{ApiVersion, Client};
//!
//! let client = Client::builder("theshop")
//!     .token("access-token")
//!     .api_version(ApiVersion::new("2022-01")?)
//!     .build()?;
//!
//! let products = client.products().list(None).await?;
//! ```

use std::fmt;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::errors::{Error, ResponseDecodingError};
use crate::client::options::serialize_query;
use crate::client::response::check_response;
use crate::error::ConfigError;
use crate::resources::{
    FulfillmentService, ImageService, OrderService, ProductService, VariantService,
};
use crate::shop::ShopDomain;
use crate::version::ApiVersion;

/// The fixed product identifier sent as the `User-Agent` header.
pub const USER_AGENT: &str = concat!("shoplazza-api/", env!("CARGO_PKG_VERSION"));

/// The authentication mode, chosen once at construction.
#[derive(Clone, PartialEq, Eq)]
enum Auth {
    /// Bearer access token, sent as `Token-Type` + `Access-Token` headers.
    Bearer(String),
    /// HTTP basic auth with the API key as username.
    Basic { api_key: String, password: String },
    /// No authentication headers.
    Anonymous,
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer(*****)"),
            Self::Basic { api_key, .. } => write!(f, "Basic({api_key}, *****)"),
            Self::Anonymous => f.write_str("Anonymous"),
        }
    }
}

/// An asynchronous client for the Shoplazza Admin REST API.
#[derive(Debug, Clone)]
pub struct Client {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Scheme + host of the shop, no path.
    base_url: Url,
    /// Path prefix prepended to every resource path.
    path_prefix: String,
    /// The authentication mode.
    auth: Auth,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

/// Builder for [`Client`].
///
/// The authentication mode is resolved when [`build`](Self::build) runs:
/// a non-empty token selects bearer auth; otherwise a configured password
/// selects basic auth; otherwise requests are sent unauthenticated.
#[derive(Debug)]
pub struct ClientBuilder {
    shop: ShopDomain,
    token: Option<String>,
    api_key: Option<String>,
    password: Option<String>,
    api_version: ApiVersion,
    base_url: Option<String>,
}

impl ClientBuilder {
    fn new(shop: ShopDomain) -> Self {
        Self {
            shop,
            token: None,
            api_key: None,
            password: None,
            api_version: ApiVersion::Default,
            base_url: None,
        }
    }

    /// Sets the permanent access token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets basic-auth credentials, used only when no token is configured.
    #[must_use]
    pub fn basic_auth(mut self, api_key: impl Into<String>, password: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self.password = Some(password.into());
        self
    }

    /// Selects the API version, which determines the path prefix used by
    /// every request this client issues.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Overrides the base URL derived from the shop domain.
    ///
    /// Useful for proxies and for tests that point the client at a local
    /// mock server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if a base URL override (or a
    /// shop identifier producing an unparsable URL) was supplied.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which
    /// only happens in unusual circumstances such as TLS initialization
    /// failure.
    pub fn build(self) -> Result<Client, ConfigError> {
        let raw = self.base_url.unwrap_or_else(|| self.shop.base_url());
        let base_url =
            Url::parse(&raw).map_err(|_| ConfigError::InvalidBaseUrl { url: raw.clone() })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl { url: raw });
        }

        let token = self.token.filter(|t| !t.is_empty());
        let password = self.password.filter(|p| !p.is_empty());
        let auth = match (token, password) {
            (Some(token), _) => Auth::Bearer(token),
            (None, Some(password)) => Auth::Basic {
                api_key: self.api_key.unwrap_or_default(),
                password,
            },
            (None, None) => Auth::Anonymous,
        };

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Ok(Client {
            http,
            base_url,
            path_prefix: self.api_version.path_prefix(),
            auth,
        })
    }
}

/// The body of a `.../count` response.
#[derive(Debug, Deserialize)]
struct CountEnvelope {
    count: u64,
}

impl Client {
    /// Returns a builder for the given shop identifier (a bare name or a
    /// full `myshoplaza.com` domain).
    #[must_use]
    pub fn builder(shop: impl Into<ShopDomain>) -> ClientBuilder {
        ClientBuilder::new(shop.into())
    }

    /// Creates a token-authenticated client with the default API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the shop identifier
    /// produces an unparsable URL.
    pub fn new(shop: impl Into<ShopDomain>, token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(shop).token(token).build()
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the API path prefix used by this client.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Returns the product operations façade.
    #[must_use]
    pub const fn products(&self) -> ProductService<'_> {
        ProductService::new(self)
    }

    /// Returns the variant operations façade.
    #[must_use]
    pub const fn variants(&self) -> VariantService<'_> {
        VariantService::new(self)
    }

    /// Returns the image operations façade.
    #[must_use]
    pub const fn images(&self) -> ImageService<'_> {
        ImageService::new(self)
    }

    /// Returns the order operations façade.
    #[must_use]
    pub const fn orders(&self) -> OrderService<'_> {
        OrderService::new(self)
    }

    /// Returns the top-level fulfillment operations façade (not nested
    /// under an order). For order-scoped fulfillments use
    /// [`OrderService::fulfillments`].
    #[must_use]
    pub const fn fulfillments(&self) -> FulfillmentService<'_> {
        FulfillmentService::new(self, None)
    }

    /// Performs a GET request and decodes the response body.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn get<T, O>(&self, path: &str, options: Option<&O>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        O: Serialize + Sync,
    {
        let (status, body) = self.execute::<(), O>(Method::GET, path, None, options).await?;
        decode(status, &body)
    }

    /// Performs a POST request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let (status, bytes) = self
            .execute::<B, ()>(Method::POST, path, Some(body), None)
            .await?;
        decode(status, &bytes)
    }

    /// Performs a POST request with no body (action endpoints such as
    /// `fulfillments/<id>/cancel`) and decodes the response.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn post_empty<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let (status, bytes) = self.execute::<(), ()>(Method::POST, path, None, None).await?;
        decode(status, &bytes)
    }

    /// Performs a PUT request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let (status, bytes) = self
            .execute::<B, ()>(Method::PUT, path, Some(body), None)
            .await?;
        decode(status, &bytes)
    }

    /// Performs a DELETE request. The response body is not decoded.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute::<(), ()>(Method::DELETE, path, None, None)
            .await?;
        Ok(())
    }

    /// Performs a GET against a `.../count` path and returns the count.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn count<O>(&self, path: &str, options: Option<&O>) -> Result<u64, Error>
    where
        O: Serialize + Sync,
    {
        let envelope: CountEnvelope = self.get(path, options).await?;
        Ok(envelope.count)
    }

    /// Builds the request, sends it, and checks the response for errors.
    ///
    /// Returns the status and raw body of a successful response.
    async fn execute<B, O>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: Option<&O>,
    ) -> Result<(u16, Vec<u8>), Error>
    where
        B: Serialize + Sync,
        O: Serialize + Sync,
    {
        let pairs = match options {
            Some(options) => serialize_query(options)?,
            None => Vec::new(),
        };
        let url = self.resolve_url(path, &pairs)?;
        let payload = body.map(serde_json::to_vec).transpose()?;

        tracing::debug!(%method, %url, "sending request");

        let mut builder = self
            .http
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT);

        builder = match &self.auth {
            Auth::Bearer(token) => builder
                .header("Token-Type", "Bearer")
                .header("Access-Token", token),
            Auth::Basic { api_key, password } => builder.basic_auth(api_key, Some(password)),
            Auth::Anonymous => builder,
        };

        if let Some(payload) = payload {
            builder = builder.body(payload);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        // Consume the body on every path so the connection is released.
        let bytes = response.bytes().await?;

        if let Err(err) = check_response(status, retry_after.as_deref(), &bytes) {
            tracing::warn!(status, error = %err, "request failed");
            return Err(err);
        }
        Ok((status, bytes.to_vec()))
    }

    /// Resolves a relative path against the base URL and appends query
    /// pairs. Query parameters already present on the path are preserved;
    /// options-derived pairs are added alongside them.
    fn resolve_url(&self, path: &str, pairs: &[(String, String)]) -> Result<Url, Error> {
        let mut url = self.base_url.join(path)?;
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Decodes a successful response body into the caller's destination shape.
fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|e| {
        Error::Decoding(ResponseDecodingError {
            body: body.to_vec(),
            message: e.to_string(),
            status,
        })
    })
}
