//! Plateful core - proximity, pickup routing and perishability scoring
//!
//! This library provides the algorithms behind the Plateful food
//! redistribution app: great-circle proximity search, nearest-neighbor
//! pickup sequencing and perishability-based urgency ranking, plus the
//! in-memory state and HTTP routes that serve them.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{distance_km, nearby_within, perishability_score, sequence_route, sort_by_urgency, PickupPlanner};
pub use crate::error::CoreError;
pub use crate::models::{FoodCategory, FoodListing, GeoPoint, Located, Organization, Perishable, PerishableItem};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let here = GeoPoint::new(19.076, 72.877).unwrap();
        assert!(distance_km(here, here) < 1e-9);
    }
}
