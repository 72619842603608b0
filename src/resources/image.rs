//! The product image resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, CountOptions, Error, ListOptions};

/// A pixel dimension that the platform reports either as a number or as a
/// numeric string (`220` and `"220"` both occur in the wild).
///
/// Whichever form arrived is preserved for re-serialization; use
/// [`as_pixels`](Self::as_pixels) to read the value numerically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Dimension {
    Number(u64),
    Text(String),
}

impl Dimension {
    /// Returns the dimension in pixels, or `None` when the textual form is
    /// not a number.
    #[must_use]
    pub fn as_pixels(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageEnvelope {
    image: Image,
}

#[derive(Debug, Deserialize)]
struct ImagesEnvelope {
    images: Vec<Image>,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    image: &'a Image,
}

/// Operations on a product's `images` collection.
///
/// Obtained from [`Client::images`]. Every operation is scoped to a product.
#[derive(Debug, Clone, Copy)]
pub struct ImageService<'a> {
    client: &'a Client,
}

impl<'a> ImageService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn path(&self, product_id: &str, suffix: &str) -> String {
        format!(
            "{}/products/{product_id}/images{suffix}",
            self.client.path_prefix()
        )
    }

    /// Lists the images of a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn list(
        &self,
        product_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Image>, Error> {
        let envelope: ImagesEnvelope =
            self.client.get(&self.path(product_id, ""), options).await?;
        Ok(envelope.images)
    }

    /// Counts the images of a product.
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
            .count(&self.path(product_id, "/count"), options)
            .await
    }

    /// Fetches a single image.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn get(
        &self,
        product_id: &str,
        image_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Image, Error> {
        let envelope: ImageEnvelope = self
            .client
            .get(&self.path(product_id, &format!("/{image_id}")), options)
            .await?;
        Ok(envelope.image)
    }

    /// Attaches a new image to a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn create(&self, product_id: &str, image: &Image) -> Result<Image, Error> {
        let envelope: ImageEnvelope = self
            .client
            .post(&self.path(product_id, ""), &ImageRequest { image })
            .await?;
        Ok(envelope.image)
    }

    /// Updates an existing image.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn update(
        &self,
        product_id: &str,
        image_id: &str,
        image: &Image,
    ) -> Result<Image, Error> {
        let envelope: ImageEnvelope = self
            .client
            .put(
                &self.path(product_id, &format!("/{image_id}")),
                &ImageRequest { image },
            )
            .await?;
        Ok(envelope.image)
    }

    /// Deletes an image from a product.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn delete(&self, product_id: &str, image_id: &str) -> Result<(), Error> {
        self.client
            .delete(&self.path(product_id, &format!("/{image_id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_decodes_number_and_string_forms() {
        let image: Image =
            serde_json::from_str(r#"{"id":"850703190","width":220,"height":"220"}"#).unwrap();

        assert_eq!(image.width, Some(Dimension::Number(220)));
        assert_eq!(image.height, Some(Dimension::Text("220".to_string())));
        assert_eq!(image.width.unwrap().as_pixels(), Some(220));
        assert_eq!(image.height.unwrap().as_pixels(), Some(220));
    }

    #[test]
    fn test_dimension_preserves_arrival_form_on_reserialize() {
        let image: Image = serde_json::from_str(r#"{"width":220,"height":"220"}"#).unwrap();
        let json = serde_json::to_value(&image).unwrap();

        assert_eq!(json["width"], 220);
        assert_eq!(json["height"], "220");
    }

    #[test]
    fn test_non_numeric_dimension_text_yields_none() {
        assert_eq!(Dimension::Text("wide".to_string()).as_pixels(), None);
        assert_eq!(Dimension::Text(" 220 ".to_string()).as_pixels(), Some(220));
    }
}
