use serde::{Deserialize, Serialize};

use crate::models::domain::{
    Donation, FoodListing, GeoPoint, ImpactTotals, Organization, PickupRequest, PlannedStop,
};

/// Listing browse response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub listings: Vec<FoodListing>,
    pub total: usize,
}

/// Listing with its distance from the query point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistancedListing {
    #[serde(flatten)]
    pub listing: FoodListing,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Response for the nearby listings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyListingsResponse {
    pub origin: GeoPoint,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    pub listings: Vec<DistancedListing>,
}

/// Listing with its perishability score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: FoodListing,
    #[serde(rename = "perishabilityScore")]
    pub perishability_score: f64,
}

/// Response for the urgent listings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgentListingsResponse {
    pub listings: Vec<ScoredListing>,
    #[serde(rename = "scoredAt")]
    pub scored_at: chrono::DateTime<chrono::Utc>,
}

/// Organization with its distance from the listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistancedOrganization {
    #[serde(flatten)]
    pub organization: Organization,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Response for organizations near a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyOrganizationsResponse {
    #[serde(rename = "listingId")]
    pub listing_id: String,
    pub organizations: Vec<DistancedOrganization>,
}

/// Response for the pickup planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupPlanResponse {
    pub stops: Vec<PlannedStop>,
    #[serde(rename = "totalDistanceKm")]
    pub total_distance_km: f64,
    #[serde(rename = "candidatesConsidered")]
    pub candidates_considered: usize,
}

/// Response for sequencing an explicit set of listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub stops: Vec<FoodListing>,
    #[serde(rename = "totalDistanceKm")]
    pub total_distance_km: f64,
}

/// Pickup request paired with the listing it targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequestEntry {
    pub request: PickupRequest,
    pub listing: FoodListing,
}

/// Donations made by one donor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationsResponse {
    pub donations: Vec<Donation>,
    pub total: usize,
}

/// Donation and impact totals for an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSummaryResponse {
    pub organization: Organization,
    #[serde(rename = "totalDonations")]
    pub total_donations: f64,
    pub impact: ImpactTotals,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
