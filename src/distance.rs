//! Great-circle distance between coordinate pairs.

use crate::model::Coordinates;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers, rounded to 3 decimal places.
///
/// Pure and infallible; callers are responsible for feeding it sane
/// coordinates.
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    round_km(EARTH_RADIUS_KM * c)
}

fn round_km(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}
