//! Coordinate cache: in-memory store and the cache-or-fetch composition.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::geocode::GeocodeError;
use crate::model::Coordinates;
use crate::traits::{CoordinateStore, Geocoder};

/// Mutex-guarded address → coordinates map.
///
/// Reference implementation of [`CoordinateStore`]; in production the same
/// contract is served by a table with a unique address column, which makes a
/// concurrent duplicate insert a benign conflict.
#[derive(Debug, Default)]
pub struct MemoryPlaces {
    places: Mutex<HashMap<String, Coordinates>>,
}

impl MemoryPlaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.places.lock().expect("places mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CoordinateStore for MemoryPlaces {
    fn lookup(&self, address: &str) -> Option<Coordinates> {
        self.places
            .lock()
            .expect("places mutex poisoned")
            .get(address)
            .copied()
    }

    fn store(&self, address: &str, coords: Coordinates) {
        // First writer wins: geocoding is idempotent for one address, so the
        // losing duplicate insert is dropped.
        self.places
            .lock()
            .expect("places mutex poisoned")
            .entry(address.to_string())
            .or_insert(coords);
    }
}

/// Cache-or-fetch: read the store, fall back to the geocoder on a miss, and
/// write the answer back.
///
/// Failures are returned to the caller and never written to the store, so a
/// later render retries the address naturally.
pub fn resolve_cached<S, G>(
    store: &S,
    geocoder: &G,
    address: &str,
) -> Result<Coordinates, GeocodeError>
where
    S: CoordinateStore + ?Sized,
    G: Geocoder + ?Sized,
{
    if let Some(coords) = store.lookup(address) {
        return Ok(coords);
    }

    debug!(address, "address not cached, querying geocoder");
    let coords = geocoder.resolve(address)?;
    store.store(address, coords);
    Ok(coords)
}
