use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{DonationPurpose, FoodCategory, QuantityUnit, RequestStatus};

/// Query for browsing listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingsQuery {
    #[serde(rename = "providerId", alias = "provider_id")]
    pub provider_id: Option<String>,
    pub category: Option<FoodCategory>,
    pub search: Option<String>,
    #[serde(rename = "includeUnavailable", alias = "include_unavailable", default)]
    pub include_unavailable: bool,
}

/// Query for listings near a point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "longitude")]
    pub lng: f64,
    #[validate(range(min = 0.0))]
    #[serde(rename = "radiusKm", alias = "radius_km")]
    pub radius_km: Option<f64>,
    pub category: Option<FoodCategory>,
}

/// Query for the most urgent listings
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UrgentQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

/// Query for organizations near a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrganizationsNearQuery {
    #[validate(range(min = 0.0))]
    #[serde(rename = "radiusKm", alias = "radius_km")]
    pub radius_km: Option<f64>,
}

/// Request to publish a new listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "providerId", alias = "provider_id")]
    pub provider_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "providerName", alias = "provider_name")]
    pub provider_name: String,
    pub category: FoodCategory,
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
    pub unit: QuantityUnit,
    /// RFC 3339 timestamp
    #[serde(rename = "expiresAt", alias = "expiry")]
    pub expires_at: String,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "longitude")]
    pub lng: f64,
}

/// Request to plan a pickup run
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanPickupsRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "longitude")]
    pub lng: f64,
    #[validate(range(min = 0.0))]
    #[serde(rename = "radiusKm", alias = "radius_km", default)]
    pub radius_km: Option<f64>,
    #[validate(range(min = 1, max = 50))]
    #[serde(rename = "maxStops", alias = "max_stops", default)]
    pub max_stops: Option<usize>,
}

/// Request to order a chosen set of listings into a route
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SequenceRouteRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "longitude")]
    pub lng: f64,
    #[serde(rename = "listingIds", alias = "listing_ids", default)]
    pub listing_ids: Vec<String>,
}

/// Request to collect a listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePickupRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "listingId", alias = "listing_id")]
    pub listing_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "ngoId", alias = "ngo_id")]
    pub ngo_id: String,
}

/// Request to move a pickup request to a new status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePickupRequest {
    pub status: RequestStatus,
}

/// Query for listing pickup requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequestsQuery {
    #[serde(rename = "ngoId", alias = "ngo_id")]
    pub ngo_id: Option<String>,
    #[serde(rename = "providerId", alias = "provider_id")]
    pub provider_id: Option<String>,
}

/// Query for a donor's donation history
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListDonationsQuery {
    #[validate(length(min = 1))]
    #[serde(rename = "donorId", alias = "donor_id")]
    pub donor_id: String,
}

/// Request to record a donation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDonationRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "donorId", alias = "donor_id")]
    pub donor_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "ngoId", alias = "ngo_id")]
    pub ngo_id: String,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[serde(default)]
    pub recurring: bool,
    pub purpose: DonationPurpose,
}

/// Request to publish an impact report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateImpactReportRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "ngoId", alias = "ngo_id")]
    pub ngo_id: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "mealsServed", alias = "meals_served")]
    pub meals_served: u32,
    #[serde(rename = "peopleImpacted", alias = "people_impacted")]
    pub people_impacted: u32,
    #[serde(rename = "imageUrls", alias = "image_urls", default)]
    pub image_urls: Vec<String>,
    #[serde(rename = "donationId", alias = "donation_id", default)]
    pub donation_id: Option<String>,
}
