//! Domain records for the dispatch core.
//!
//! These mirror the rows the persistence collaborator hands over; the
//! dispatch routines consume them as plain values and never reach back into
//! storage themselves.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

pub type RestaurantId = u64;
pub type ProductId = u64;
pub type OrderId = u64;

/// A geographic point with explicit axis names.
///
/// The geocoding service transmits longitude first while the distance
/// formula works latitude-first; named fields keep the two conventions from
/// being swapped silently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    /// Free text, used verbatim as the geocoding key.
    pub address: String,
    pub contact_phone: String,
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub special_offer: bool,
}

/// One row of a restaurant's menu. At most one entry exists per
/// (restaurant, product) pair; only `availability = true` entries count
/// toward feasibility.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub restaurant_id: RestaurantId,
    pub product_id: ProductId,
    pub availability: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Raw,
    Processed,
}

impl OrderStatus {
    pub fn display(self) -> &'static str {
        match self {
            OrderStatus::Raw => "Unprocessed",
            OrderStatus::Processed => "Processed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    Immediate,
    Electronic,
    Cash,
}

impl PaymentMethod {
    pub fn display(self) -> &'static str {
        match self {
            PaymentMethod::Immediate => "Immediately",
            PaymentMethod::Electronic => "Electronic",
            PaymentMethod::Cash => "Cash",
        }
    }
}

/// A single order line. `price` is the line total frozen at intake, so later
/// catalog price edits do not rewrite past orders.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    /// Prices a line at intake: unit price × quantity.
    pub fn priced(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            quantity,
            price: product.price * f64::from(quantity),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    /// Delivery address, free text, used verbatim as the geocoding key.
    pub address: String,
    pub status: OrderStatus,
    pub payment: Option<PaymentMethod>,
    pub comment: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Distinct product ids across the line items. Quantity is irrelevant to
    /// feasibility, so duplicates collapse.
    pub fn product_ids(&self) -> HashSet<ProductId> {
        self.items.iter().map(|item| item.product_id).collect()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Intake validation. Keeps empty orders out of the store; the ranking
    /// engine itself takes subset semantics literally and would match every
    /// indexed restaurant against an empty order.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::ZeroQuantity(item.product_id));
        }
        Ok(())
    }
}

/// Errors rejected at order intake.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The order has no line items.
    #[error("order has no line items")]
    EmptyOrder,

    /// A line item requests zero units of a product.
    #[error("line item for product {0} has zero quantity")]
    ZeroQuantity(ProductId),
}
