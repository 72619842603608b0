//! Typed façades over the REST resources.
//!
//! Each façade borrows the [`Client`](crate::Client) it was created from and
//! builds its request paths from that client's API path prefix, so two
//! clients with different versions never share a prefix.

mod fulfillment;
mod image;
mod order;
mod product;
mod variant;

pub use fulfillment::{Fulfillment, FulfillmentService, Receipt};
pub use image::{Dimension, Image, ImageService};
pub use order::{
    Address, ClientDetails, DiscountCode, LineItem, NoteAttribute, Order, OrderCountOptions,
    OrderListOptions, OrderService, PaymentDetails, Refund, RefundLineItem, ShippingLine, TaxLine,
    Transaction,
};
pub use product::{Product, ProductOption, ProductService};
pub use variant::{Variant, VariantService};

/// The resource a nested collection hangs off, e.g. `orders/450789469` for
/// an order's fulfillments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Parent {
    pub resource: &'static str,
    pub id: String,
}

/// Composes the path prefix for a collection, optionally nested under a
/// parent resource.
///
/// `nested_prefix("openapi", None, "fulfillments")` yields
/// `openapi/fulfillments`; with a parent of `orders`/`450789469` it yields
/// `openapi/orders/450789469/fulfillments`.
pub(crate) fn nested_prefix(api_prefix: &str, parent: Option<&Parent>, child: &str) -> String {
    match parent {
        Some(parent) => format!("{api_prefix}/{}/{}/{child}", parent.resource, parent.id),
        None => format!("{api_prefix}/{child}"),
    }
}
