//! Collaborator seams for the dispatch core.
//!
//! These are intentionally minimal. The web layer owns persistence and
//! credentials; these traits are the narrow interfaces the dispatch routines
//! need from it, and tests implement them with in-memory fakes.

use crate::geocode::GeocodeError;
use crate::model::Coordinates;

/// Resolves a free-text address to coordinates via an external service.
pub trait Geocoder {
    fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeError>;
}

/// Persisted address → coordinates cache.
///
/// Keys are exact address strings with no normalization, so two spellings of
/// one address are distinct entries. Entries are immutable once written and
/// failures are never stored, so implementations only need insert-if-absent
/// semantics under concurrency.
pub trait CoordinateStore {
    /// Pure read; `None` means the address has never been resolved.
    fn lookup(&self, address: &str) -> Option<Coordinates>;

    /// First-writer-wins insert; a concurrent duplicate insert is a no-op.
    fn store(&self, address: &str, coords: Coordinates);
}
