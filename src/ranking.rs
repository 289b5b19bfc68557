//! Order feasibility and distance ranking.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::warn;

use crate::distance::distance_km;
use crate::menu::AvailabilityIndex;
use crate::model::{Order, Restaurant, RestaurantId};
use crate::places::resolve_cached;
use crate::traits::{CoordinateStore, Geocoder};

/// A restaurant able to fulfill an order, with its distance to the delivery
/// address. `distance_km: None` means the distance could not be resolved,
/// not that the restaurant is infeasible.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub address: String,
    pub distance_km: Option<f64>,
}

/// Restaurants able to fulfill the whole order, nearest first.
///
/// A restaurant qualifies iff the order's distinct product set is a subset of
/// its available products — partial fulfillment is not offered, an order is
/// never split across restaurants. Distances resolve through the coordinate
/// cache with the geocoder as fallback; a geocoding failure on either
/// address leaves that candidate's distance unresolved and sorts it after
/// every resolved one. Feasibility is never lost to a geocoding outage.
pub fn rank_restaurants_for_order<S, G>(
    order: &Order,
    restaurants: &[Restaurant],
    index: &AvailabilityIndex,
    places: &S,
    geocoder: &G,
) -> Vec<Candidate>
where
    S: CoordinateStore,
    G: Geocoder,
{
    let required = order.product_ids();

    let mut candidates: Vec<Candidate> = restaurants
        .iter()
        .filter(|restaurant| index.can_fulfill(restaurant.id, &required))
        .map(|restaurant| Candidate {
            restaurant_id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            distance_km: delivery_distance(places, geocoder, &restaurant.address, &order.address),
        })
        .collect();

    // sort_by is stable, so equal distances (and the unresolved tail) keep
    // the caller's restaurant order.
    candidates.sort_by(|a, b| compare_distances(a.distance_km, b.distance_km));
    candidates
}

/// Resolves both endpoints through the cache and measures between them. A
/// failure on either side degrades to an unknown distance.
fn delivery_distance<S, G>(
    places: &S,
    geocoder: &G,
    restaurant_address: &str,
    delivery_address: &str,
) -> Option<f64>
where
    S: CoordinateStore,
    G: Geocoder,
{
    let restaurant = resolve_cached(places, geocoder, restaurant_address);
    let delivery = resolve_cached(places, geocoder, delivery_address);

    match (restaurant, delivery) {
        (Ok(from), Ok(to)) => Some(distance_km(from, to)),
        (Err(err), _) | (_, Err(err)) => {
            warn!(restaurant_address, delivery_address, %err, "distance left unresolved");
            None
        }
    }
}

fn compare_distances(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
