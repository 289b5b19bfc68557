//! foodcart-dispatch core
//!
//! Restaurant feasibility matching and distance ranking for the order
//! dashboard, backed by a lookaside coordinate cache over an external
//! geocoding service.

pub mod traits;
pub mod model;
pub mod menu;
pub mod ranking;
pub mod dashboard;
pub mod geocode;
pub mod places;
pub mod distance;
