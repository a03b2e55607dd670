// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod perishability;
pub mod planner;
pub mod proximity;
pub mod route;

pub use distance::{distance_km, haversine_distance};
pub use filters::{filter_listings, matches_listing, ListingQuery};
pub use perishability::{parse_expiry, perishability_score, score_all, sort_by_urgency};
pub use planner::{PickupPlan, PickupPlanner};
pub use proximity::{nearby_with_distance, nearby_within, Nearby, DEFAULT_RADIUS_KM};
pub use route::{route_length_km, sequence_route};
