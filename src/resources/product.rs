//! The product resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::image::Image;
use super::variant::Variant;
use crate::client::{Client, CountOptions, Error, ListOptions};

/// A product in the shop's catalog.
///
/// Every field is optional: responses filtered with the `fields` option omit
/// everything not asked for, and requests only send what is set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_only_default_variant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_tracking: Option<bool>,
    /// What to do when a variant is out of stock (`deny` or `continue`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_variant_image: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProductOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
}

/// A named option axis of a product (e.g. `Size` with values `S`, `M`, `L`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    product: Product,
}

#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

#[derive(Debug, Serialize)]
struct ProductRequest<'a> {
    product: &'a Product,
}

/// Operations on the `products` collection.
///
/// Obtained from [`Client::products`].
#[derive(Debug, Clone, Copy)]
pub struct ProductService<'a> {
    client: &'a Client,
}

impl<'a> ProductService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}/products{suffix}", self.client.path_prefix())
    }

    /// Lists products.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Product>, Error> {
        let envelope: ProductsEnvelope = self.client.get(&self.path(""), options).await?;
        Ok(envelope.products)
    }

    /// Counts products.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, Error> {
        self.client.count(&self.path("/count"), options).await
    }

    /// Fetches a single product by ID.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn get(&self, id: &str, options: Option<&ListOptions>) -> Result<Product, Error> {
        let envelope: ProductEnvelope = self
            .client
            .get(&self.path(&format!("/{id}")), options)
            .await?;
        Ok(envelope.product)
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn create(&self, product: &Product) -> Result<Product, Error> {
        let envelope: ProductEnvelope = self
            .client
            .post(&self.path(""), &ProductRequest { product })
            .await?;
        Ok(envelope.product)
    }

    /// Updates an existing product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn update(&self, id: &str, product: &Product) -> Result<Product, Error> {
        let envelope: ProductEnvelope = self
            .client
            .put(&self.path(&format!("/{id}")), &ProductRequest { product })
            .await?;
        Ok(envelope.product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.client.delete(&self.path(&format!("/{id}"))).await
    }
}
