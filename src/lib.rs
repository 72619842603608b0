//! # Shoplazza API Rust Client
//!
//! A typed Rust client for the Shoplazza Admin REST API, covering shop
//! naming, API version selection, authenticated request dispatch, error
//! normalization, and typed resource operations.
//!
//! ## Overview
//!
//! This crate provides:
//! - Shop domain normalization via [`ShopDomain`]
//! - API version selection via [`ApiVersion`], carried per client
//! - An async [`Client`] with token, basic, or anonymous authentication
//! - Normalization of the platform's error body shapes into
//!   [`client::ResponseError`], with rate limits surfaced as
//!   [`client::RateLimitError`]
//! - Typed façades for products, variants, images, orders, and fulfillments
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shoplazza_api::{ApiVersion, Client, ListOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // Build a client for one shop. Bare names are normalized to the full
//! // `<name>.myshoplaza.com` domain.
//! let client = Client::builder("theshop")
//!     .token("access-token")
//!     .api_version(ApiVersion::new("2022-01")?)
//!     .build()?;
//!
//! // List the first page of products.
//! let options = ListOptions {
//!     limit: Some(50),
//!     ..ListOptions::default()
//! };
//! let products = client.products().list(Some(&options)).await?;
//!
//! // Work with an order's fulfillments.
//! let fulfillments = client.orders().fulfillments("450789469").list(None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`client::Error`]. Failure responses are
//! normalized from the platform's three error body shapes (a flat message,
//! a list, or a field map) into a uniform [`client::ResponseError`]; bodies
//! that fit none of them are surfaced as
//! [`client::ResponseDecodingError`] with the raw bytes attached. Nothing
//! is retried automatically.
//!
//! ```rust,no_run
//! use shoplazza_api::client::Error;
//! # async fn run(client: shoplazza_api::Client) {
//! match client.products().get("1234", None).await {
//!     Ok(product) => println!("{:?}", product.title),
//!     Err(Error::RateLimit(e)) => println!("throttled, retry in {}s", e.retry_after),
//!     Err(Error::Response(e)) => println!("API error {}: {}", e.status, e),
//!     Err(other) => println!("request failed: {other}"),
//! }
//! # }
//! ```

pub mod client;
pub mod error;
pub mod resources;
pub mod shop;
pub mod version;

pub use client::{Client, ClientBuilder, CountOptions, Error, ListOptions};
pub use error::ConfigError;
pub use resources::{
    Address, ClientDetails, Dimension, DiscountCode, Fulfillment, FulfillmentService, Image,
    ImageService, LineItem, NoteAttribute, Order, OrderCountOptions, OrderListOptions,
    OrderService, PaymentDetails, Product, ProductOption, ProductService, Receipt, Refund,
    RefundLineItem, ShippingLine, TaxLine, Transaction, Variant, VariantService,
};
pub use shop::ShopDomain;
pub use version::ApiVersion;
