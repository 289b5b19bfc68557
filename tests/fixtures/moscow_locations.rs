//! Real Moscow locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap, longitude first to match the
//! geocoder wire convention.

/// A named place with its address string and coordinates.
#[derive(Debug, Clone, Copy)]
pub struct NamedPlace {
    pub name: &'static str,
    pub address: &'static str,
    pub lon: f64,
    pub lat: f64,
}

impl NamedPlace {
    pub const fn new(name: &'static str, address: &'static str, lon: f64, lat: f64) -> Self {
        Self { name, address, lon, lat }
    }
}

// ============================================================================
// Restaurant sites (central Moscow)
// ============================================================================

pub const RESTAURANT_SITES: &[NamedPlace] = &[
    NamedPlace::new("Tverskaya kitchen", "Moscow, Tverskaya St 7", 37.607580, 55.760221),
    NamedPlace::new("Arbat grill", "Moscow, Arbat St 12", 37.591181, 55.749481),
    NamedPlace::new("Taganka pizzeria", "Moscow, Taganskaya Square 1", 37.653534, 55.742109),
    NamedPlace::new("Paveletskaya deli", "Moscow, Paveletskaya Square 2", 37.639817, 55.731055),
    NamedPlace::new("VDNKh canteen", "Moscow, Prospekt Mira 119", 37.628118, 55.826338),
];

// ============================================================================
// Delivery spots
// ============================================================================

pub const DELIVERY_SPOTS: &[NamedPlace] = &[
    NamedPlace::new("Red Square", "Moscow, Red Square", 37.620393, 55.753960),
    NamedPlace::new("Gorky Park", "Moscow, Krymsky Val 9", 37.603187, 55.729874),
    NamedPlace::new("Sparrow Hills", "Moscow, Kosygina St 28", 37.558620, 55.710303),
    NamedPlace::new("Kutuzovsky flat", "Moscow, Kutuzovsky Ave 24", 37.536658, 55.742231),
];
