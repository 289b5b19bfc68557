//! Test fixtures for foodcart-dispatch.
//!
//! Provides realistic test data including:
//! - Real Moscow locations (from OpenStreetMap)
//! - Builders for restaurants, menu entries, and orders
//! - In-memory geocoder fakes with call counting

pub mod moscow_locations;

#[allow(unused_imports)]
pub use moscow_locations::*;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use foodcart_dispatch::geocode::GeocodeError;
use foodcart_dispatch::model::{
    Coordinates, MenuEntry, Order, OrderItem, OrderStatus, Product, ProductId, Restaurant,
    RestaurantId,
};
use foodcart_dispatch::traits::Geocoder;

// ============================================================================
// Geocoder fakes
// ============================================================================

/// Geocoder backed by a fixed address table. Unknown addresses fail with
/// `NoMatches`, which makes it double as an outage simulator for any address
/// left out of the table. Every call is counted.
#[derive(Debug, Default)]
pub struct TableGeocoder {
    entries: HashMap<String, Coordinates>,
    calls: AtomicUsize,
}

impl TableGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: &str, lon: f64, lat: f64) -> Self {
        self.entries
            .insert(address.to_string(), Coordinates::new(lon, lat));
        self
    }

    pub fn covering(places: &[moscow_locations::NamedPlace]) -> Self {
        let mut geocoder = Self::new();
        for place in places {
            geocoder = geocoder.with(place.address, place.lon, place.lat);
        }
        geocoder
    }

    /// Number of resolve calls made so far, cache hits excluded by design.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Geocoder for TableGeocoder {
    fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .get(address)
            .copied()
            .ok_or_else(|| GeocodeError::NoMatches(address.to_string()))
    }
}

// ============================================================================
// Domain builders
// ============================================================================

pub fn restaurant(id: RestaurantId, name: &str, address: &str) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        address: address.to_string(),
        contact_phone: "+7 495 000 00 00".to_string(),
    }
}

pub fn menu_entry(
    restaurant_id: RestaurantId,
    product_id: ProductId,
    availability: bool,
) -> MenuEntry {
    MenuEntry {
        restaurant_id,
        product_id,
        availability,
    }
}

#[allow(dead_code)]
pub fn product(id: ProductId, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        description: String::new(),
        special_offer: false,
    }
}

/// Order with one single-unit line per product id and a flat line price.
pub fn order(id: u64, address: &str, product_ids: &[ProductId]) -> Order {
    Order {
        id,
        firstname: "Ivan".to_string(),
        lastname: "Petrov".to_string(),
        phonenumber: "+7 900 000 00 00".to_string(),
        address: address.to_string(),
        status: OrderStatus::Raw,
        payment: None,
        comment: String::new(),
        items: product_ids
            .iter()
            .map(|&product_id| OrderItem {
                product_id,
                quantity: 1,
                price: 100.0,
            })
            .collect(),
    }
}
