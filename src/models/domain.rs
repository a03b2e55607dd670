use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lng", alias = "longitude")]
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point, rejecting non-finite or out-of-range coordinates
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let point = Self { latitude, longitude };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(CoreError::InvalidCoordinate { latitude, longitude })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Anything that sits at a fixed point on the map
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> GeoPoint {
        (**self).location()
    }
}

/// Food category, which drives the base perishability risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    #[serde(alias = "cooked")]
    Prepared,
    Raw,
}

/// Anything with a category and an expiry instant
pub trait Perishable {
    fn category(&self) -> FoodCategory;
    fn expires_at(&self) -> DateTime<Utc>;
}

impl<T: Perishable + ?Sized> Perishable for &T {
    fn category(&self) -> FoodCategory {
        (**self).category()
    }

    fn expires_at(&self) -> DateTime<Utc> {
        (**self).expires_at()
    }
}

/// Minimal scorer input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerishableItem {
    pub category: FoodCategory,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

impl Perishable for PerishableItem {
    fn category(&self) -> FoodCategory {
        self.category
    }

    fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    Servings,
    Kg,
    G,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Available,
    Requested,
    Claimed,
}

/// Surplus food offered by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodListing {
    pub id: String,
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[serde(rename = "providerName")]
    pub provider_name: String,
    pub category: FoodCategory,
    pub description: String,
    pub quantity: f64,
    pub unit: QuantityUnit,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub location: GeoPoint,
    pub status: ListingStatus,
}

impl FoodListing {
    pub fn is_available(&self) -> bool {
        self.status == ListingStatus::Available
    }
}

impl Located for FoodListing {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

impl Perishable for FoodListing {
    fn category(&self) -> FoodCategory {
        self.category
    }

    fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// Redistribution organization (NGO) that collects food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub verified: bool,
}

impl Located for Organization {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

/// An organization's request to collect a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    pub id: String,
    #[serde(rename = "listingId")]
    pub listing_id: String,
    #[serde(rename = "ngoId")]
    pub ngo_id: String,
    #[serde(rename = "ngoName")]
    pub ngo_name: String,
    pub status: RequestStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "pickupTime", default)]
    pub pickup_time: Option<DateTime<Utc>>,
    #[serde(rename = "distanceKm", default)]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationPurpose {
    Logistics,
    Food,
}

/// Monetary donation to an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    #[serde(rename = "donorId")]
    pub donor_id: String,
    #[serde(rename = "ngoId")]
    pub ngo_id: String,
    #[serde(rename = "ngoName")]
    pub ngo_name: String,
    pub amount: f64,
    pub recurring: bool,
    pub purpose: DonationPurpose,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Report an organization publishes about food it distributed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub id: String,
    #[serde(rename = "ngoId")]
    pub ngo_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "mealsServed")]
    pub meals_served: u32,
    #[serde(rename = "peopleImpacted")]
    pub people_impacted: u32,
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
    #[serde(rename = "donationId", default)]
    pub donation_id: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Aggregated meals and people for one organization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactTotals {
    #[serde(rename = "mealsServed")]
    pub meals_served: u64,
    #[serde(rename = "peopleImpacted")]
    pub people_impacted: u64,
}

/// One stop on a planned pickup route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedStop {
    pub listing: FoodListing,
    #[serde(rename = "perishabilityScore")]
    pub perishability_score: f64,
    #[serde(rename = "legDistanceKm")]
    pub leg_distance_km: f64,
    #[serde(rename = "cumulativeDistanceKm")]
    pub cumulative_distance_km: f64,
}

/// Pickup route planning limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerOptions {
    pub default_radius_km: f64,
    pub max_stops: usize,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            default_radius_km: 10.0,
            max_stops: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_accepts_bounds() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_geo_point_rejects_out_of_range() {
        let err = GeoPoint::new(91.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidCoordinate { latitude: 91.0, longitude: 0.0 }
        );
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_category_accepts_cooked_alias() {
        let cat: FoodCategory = serde_json::from_str("\"cooked\"").unwrap();
        assert_eq!(cat, FoodCategory::Prepared);
        assert_eq!(serde_json::to_string(&FoodCategory::Raw).unwrap(), "\"raw\"");
    }

    #[test]
    fn test_geo_point_wire_names() {
        let point: GeoPoint = serde_json::from_str(r#"{"latitude": 19.0, "lng": 72.8}"#).unwrap();
        assert_eq!(point, GeoPoint { latitude: 19.0, longitude: 72.8 });
    }
}
