//! Menu availability snapshot.

use std::collections::{HashMap, HashSet};

use crate::model::{MenuEntry, Product, ProductId, Restaurant, RestaurantId};

/// Restaurant → set of available product ids.
///
/// Rebuilt from the current menu entries on every dashboard render; there is
/// no cross-render caching, so menu edits are visible on the next render.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    by_restaurant: HashMap<RestaurantId, HashSet<ProductId>>,
}

impl AvailabilityIndex {
    /// Groups available menu entries by restaurant. Entries flagged
    /// unavailable do not contribute; a restaurant with nothing available is
    /// absent from the index.
    pub fn build(entries: &[MenuEntry]) -> Self {
        let mut by_restaurant: HashMap<RestaurantId, HashSet<ProductId>> = HashMap::new();
        for entry in entries.iter().filter(|entry| entry.availability) {
            by_restaurant
                .entry(entry.restaurant_id)
                .or_default()
                .insert(entry.product_id);
        }

        Self { by_restaurant }
    }

    pub fn available_products(&self, restaurant_id: RestaurantId) -> Option<&HashSet<ProductId>> {
        self.by_restaurant.get(&restaurant_id)
    }

    /// Subset test: can this restaurant supply every required product?
    ///
    /// A restaurant absent from the index has nothing on sale and never
    /// qualifies, even for an empty required set.
    pub fn can_fulfill(&self, restaurant_id: RestaurantId, required: &HashSet<ProductId>) -> bool {
        self.by_restaurant
            .get(&restaurant_id)
            .is_some_and(|available| required.is_subset(available))
    }
}

/// Product × restaurant availability grid for the products screen.
///
/// Each product maps to a flag per restaurant, aligned with the order of
/// `restaurants`; a missing menu entry reads as unavailable.
pub fn availability_matrix(
    products: &[Product],
    restaurants: &[Restaurant],
    entries: &[MenuEntry],
) -> Vec<(ProductId, Vec<bool>)> {
    let mut on_sale: HashSet<(RestaurantId, ProductId)> = HashSet::new();
    for entry in entries.iter().filter(|entry| entry.availability) {
        on_sale.insert((entry.restaurant_id, entry.product_id));
    }

    products
        .iter()
        .map(|product| {
            let flags = restaurants
                .iter()
                .map(|restaurant| on_sale.contains(&(restaurant.id, product.id)))
                .collect();
            (product.id, flags)
        })
        .collect()
}
