use chrono::{DateTime, Utc};

use crate::core::{
    distance::distance_km,
    perishability::score_all,
    proximity::nearby_within,
    route::sequence_route,
};
use crate::models::{FoodListing, GeoPoint, Located, PlannedStop, PlannerOptions};

struct Candidate<'a> {
    listing: &'a FoodListing,
    score: f64,
}

impl Located for Candidate<'_> {
    fn location(&self) -> GeoPoint {
        self.listing.location
    }
}

/// Result of planning a pickup run
#[derive(Debug)]
pub struct PickupPlan {
    pub stops: Vec<PlannedStop>,
    pub total_distance_km: f64,
    pub candidates_considered: usize,
}

/// Builds pickup runs for an organization
///
/// # Pipeline Stages
/// 1. Availability filter
/// 2. Radius filter around the organization
/// 3. Keep the most perishable `max_stops` listings
/// 4. Nearest-neighbor ordering of the kept listings
#[derive(Debug, Clone)]
pub struct PickupPlanner {
    options: PlannerOptions,
}

impl PickupPlanner {
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PlannerOptions {
        self.options
    }

    /// Plan a pickup run starting from `start`
    ///
    /// # Arguments
    /// * `start` - Where the collecting organization sets off from
    /// * `listings` - All known listings, in any status
    /// * `radius_km` - Search radius, falling back to the configured default
    /// * `max_stops` - Stop limit, falling back to the configured default
    /// * `now` - Reference instant for perishability scoring
    pub fn plan(
        &self,
        start: GeoPoint,
        listings: &[FoodListing],
        radius_km: Option<f64>,
        max_stops: Option<usize>,
        now: DateTime<Utc>,
    ) -> PickupPlan {
        let radius_km = radius_km.unwrap_or(self.options.default_radius_km);
        let max_stops = max_stops.unwrap_or(self.options.max_stops);

        // Stage 1 & 2
        let available: Vec<&FoodListing> = listings.iter().filter(|l| l.is_available()).collect();
        let in_range = nearby_within(start, &available, radius_km);
        let candidates_considered = in_range.len();

        // Stage 3
        let chosen: Vec<Candidate<'_>> = score_all(&in_range, now)
            .into_iter()
            .take(max_stops)
            .map(|(listing, score)| Candidate { listing: **listing, score })
            .collect();

        // Stage 4
        let route = sequence_route(start, &chosen);

        let mut stops = Vec::with_capacity(route.len());
        let mut from = start;
        let mut total_distance_km = 0.0;

        for candidate in route {
            let to = candidate.location();
            let leg = distance_km(from, to);
            total_distance_km += leg;
            from = to;

            stops.push(PlannedStop {
                listing: candidate.listing.clone(),
                perishability_score: candidate.score,
                leg_distance_km: leg,
                cumulative_distance_km: total_distance_km,
            });
        }

        PickupPlan {
            stops,
            total_distance_km,
            candidates_considered,
        }
    }
}

impl Default for PickupPlanner {
    fn default() -> Self {
        Self::new(PlannerOptions::default())
    }
}
