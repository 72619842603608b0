//! The fulfillment resource.
//!
//! Fulfillments exist both as a top-level collection and nested under an
//! order. [`Client::fulfillments`] gives the top-level façade;
//! [`OrderService::fulfillments`](super::OrderService::fulfillments) gives
//! one scoped to `orders/<id>/fulfillments`. The two differ only in the
//! path prefix they compose.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::LineItem;
use super::{nested_prefix, Parent};
use crate::client::{Client, CountOptions, Error, ListOptions};

/// A shipment of some or all of an order's line items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Fulfillment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,
    /// IDs of the order line items covered by this fulfillment, used when
    /// creating a partial fulfillment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_item_ids: Vec<String>,
}

/// A payment gateway receipt attached to a fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Receipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testcase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FulfillmentEnvelope {
    fulfillment: Fulfillment,
}

#[derive(Debug, Deserialize)]
struct FulfillmentsEnvelope {
    fulfillments: Vec<Fulfillment>,
}

#[derive(Debug, Serialize)]
struct FulfillmentRequest<'a> {
    fulfillment: &'a Fulfillment,
}

/// Operations on a `fulfillments` collection, top-level or order-scoped.
#[derive(Debug, Clone)]
pub struct FulfillmentService<'a> {
    client: &'a Client,
    parent: Option<Parent>,
}

impl<'a> FulfillmentService<'a> {
    pub(crate) const fn new(client: &'a Client, parent: Option<Parent>) -> Self {
        Self { client, parent }
    }

    fn path(&self, suffix: &str) -> String {
        let prefix = nested_prefix(self.client.path_prefix(), self.parent.as_ref(), "fulfillments");
        format!("{prefix}{suffix}")
    }

    /// Lists fulfillments.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Fulfillment>, Error> {
        let envelope: FulfillmentsEnvelope = self.client.get(&self.path(""), options).await?;
        Ok(envelope.fulfillments)
    }

    /// Counts fulfillments.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, Error> {
        self.client.count(&self.path("/count"), options).await
    }

    /// Fetches a single fulfillment by ID.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn get(
        &self,
        id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Fulfillment, Error> {
        let envelope: FulfillmentEnvelope = self
            .client
            .get(&self.path(&format!("/{id}")), options)
            .await?;
        Ok(envelope.fulfillment)
    }

    /// Creates a fulfillment.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn create(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, Error> {
        let envelope: FulfillmentEnvelope = self
            .client
            .post(&self.path(""), &FulfillmentRequest { fulfillment })
            .await?;
        Ok(envelope.fulfillment)
    }

    /// Updates an existing fulfillment.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn update(&self, id: &str, fulfillment: &Fulfillment) -> Result<Fulfillment, Error> {
        let envelope: FulfillmentEnvelope = self
            .client
            .put(
                &self.path(&format!("/{id}")),
                &FulfillmentRequest { fulfillment },
            )
            .await?;
        Ok(envelope.fulfillment)
    }

    /// Marks a fulfillment as complete.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn complete(&self, id: &str) -> Result<Fulfillment, Error> {
        self.action(id, "complete").await
    }

    /// Transitions a fulfillment back to the open state.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn transition(&self, id: &str) -> Result<Fulfillment, Error> {
        self.action(id, "open").await
    }

    /// Cancels a fulfillment.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure taxonomy.
    pub async fn cancel(&self, id: &str) -> Result<Fulfillment, Error> {
        self.action(id, "cancel").await
    }

    /// POSTs a bodiless state-change action for one fulfillment.
    async fn action(&self, id: &str, action: &str) -> Result<Fulfillment, Error> {
        let envelope: FulfillmentEnvelope = self
            .client
            .post_empty(&self.path(&format!("/{id}/{action}")))
            .await?;
        Ok(envelope.fulfillment)
    }
}
