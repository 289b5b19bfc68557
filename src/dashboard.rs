//! Manager dashboard assembly.
//!
//! One render: load the orders and one menu snapshot, warm the coordinate
//! cache, then rank restaurants per order.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::menu::AvailabilityIndex;
use crate::model::{Order, OrderId, PaymentMethod, Restaurant};
use crate::places::resolve_cached;
use crate::ranking::{Candidate, rank_restaurants_for_order};
use crate::traits::{CoordinateStore, Geocoder};

/// One order's row on the manager dashboard, ready for the template layer.
#[derive(Debug, Clone, Serialize)]
pub struct OrderCard {
    pub id: OrderId,
    pub status: &'static str,
    pub payment: Option<&'static str>,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: String,
    pub comment: String,
    pub total_price: f64,
    pub restaurants: Vec<Candidate>,
}

/// Builds the dashboard: one card per order, in input order, each carrying
/// the ranked list of restaurants able to fulfill it.
pub fn order_cards<S, G>(
    orders: &[Order],
    restaurants: &[Restaurant],
    index: &AvailabilityIndex,
    places: &S,
    geocoder: &G,
) -> Vec<OrderCard>
where
    S: CoordinateStore + Sync,
    G: Geocoder + Sync,
{
    prefetch_coordinates(orders, restaurants, places, geocoder);

    orders
        .iter()
        .map(|order| OrderCard {
            id: order.id,
            status: order.status.display(),
            payment: order.payment.map(PaymentMethod::display),
            firstname: order.firstname.clone(),
            lastname: order.lastname.clone(),
            phonenumber: order.phonenumber.clone(),
            address: order.address.clone(),
            comment: order.comment.clone(),
            total_price: order.total_price(),
            restaurants: rank_restaurants_for_order(order, restaurants, index, places, geocoder),
        })
        .collect()
}

/// Warms the coordinate cache for every distinct address on the dashboard.
///
/// Lookups for distinct addresses are independent, so they run in parallel.
/// Failures are dropped here; the per-candidate lookaside in the ranking
/// pass is the correctness path and reports them as unresolved distances.
pub fn prefetch_coordinates<S, G>(
    orders: &[Order],
    restaurants: &[Restaurant],
    places: &S,
    geocoder: &G,
) where
    S: CoordinateStore + Sync,
    G: Geocoder + Sync,
{
    let mut addresses: Vec<&str> = restaurants
        .iter()
        .map(|restaurant| restaurant.address.as_str())
        .chain(orders.iter().map(|order| order.address.as_str()))
        .collect();
    addresses.sort_unstable();
    addresses.dedup();
    addresses.retain(|address| places.lookup(address).is_none());

    if addresses.is_empty() {
        return;
    }
    debug!(count = addresses.len(), "prefetching coordinates");

    addresses.par_iter().for_each(|address| {
        let _ = resolve_cached(places, geocoder, address);
    });
}
