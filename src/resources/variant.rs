//! The product variant resource.
//!
//! Variant collections live under a product (`products/<id>/variants`), but
//! a single variant is addressed at the top level (`variants/<id>`), so the
//! read and update paths differ from the list and create paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::image::Image;
use crate::client::{Client, CountOptions, Error, ListOptions};

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Decimal amount as a string, e.g. `"19.99"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Decimal amount as a string, e.g. `"24.99"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    /// Decimal weight as a string, in `weight_unit` units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VariantEnvelope {
    variant: Variant,
}

#[derive(Debug, Deserialize)]
struct VariantsEnvelope {
    variants: Vec<Variant>,
}

#[derive(Debug, Serialize)]
struct VariantRequest<'a> {
    variant: &'a Variant,
}

/// Operations on the `variants` collection.
///
/// Obtained from [`Client::variants`].
#[derive(Debug, Clone, Copy)]
pub struct VariantService<'a> {
    client: &'a Client,
}

impl<'a> VariantService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn product_path(&self, product_id: &str, suffix: &str) -> String {
        format!(
            "{}/products/{product_id}/variants{suffix}",
            self.client.path_prefix()
        )
    }

    fn variant_path(&self, variant_id: &str) -> String {
        format!("{}/variants/{variant_id}", self.client.path_prefix())
    }

    /// Lists the variants of a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn list(
        &self,
        product_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Variant>, Error> {
        let envelope: VariantsEnvelope = self
            .client
            .get(&self.product_path(product_id, ""), options)
            .await?;
        Ok(envelope.variants)
    }

    /// Counts the variants of a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn count(
        &self,
        product_id: &str,
        options: Option<&CountOptions>,
    ) -> Result<u64, Error> {
        self.client
            .count(&self.product_path(product_id, "/count"), options)
            .await
    }

    /// Fetches a single variant by its own ID.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn get(
        &self,
        variant_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Variant, Error> {
        let envelope: VariantEnvelope = self
            .client
            .get(&self.variant_path(variant_id), options)
            .await?;
        Ok(envelope.variant)
    }

    /// Creates a variant under a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn create(&self, product_id: &str, variant: &Variant) -> Result<Variant, Error> {
        let envelope: VariantEnvelope = self
            .client
            .post(
                &self.product_path(product_id, ""),
                &VariantRequest { variant },
            )
            .await?;
        Ok(envelope.variant)
    }

    /// Updates an existing variant.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn update(&self, variant_id: &str, variant: &Variant) -> Result<Variant, Error> {
        let envelope: VariantEnvelope = self
            .client
            .put(&self.variant_path(variant_id), &VariantRequest { variant })
            .await?;
        Ok(envelope.variant)
    }

    /// Deletes a variant from a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn delete(&self, product_id: &str, variant_id: &str) -> Result<(), Error> {
        self.client
            .delete(&self.product_path(product_id, &format!("/{variant_id}")))
            .await
    }
}
