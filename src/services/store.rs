use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::core::distance::distance_km;
use crate::models::{
    Donation, DonationPurpose, FoodCategory, FoodListing, GeoPoint, ImpactReport, ImpactTotals,
    ListingStatus, Organization, PickupRequest, QuantityUnit, RequestStatus,
};

/// Errors that can occur with store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    #[error("Request not found: {0}")]
    RequestNotFound(String),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    #[error("Listing {0} is not available")]
    ListingUnavailable(String),

    #[error("Request {0} is already closed")]
    RequestClosed(String),
}

/// Fields a provider supplies when publishing a listing
#[derive(Debug, Clone)]
pub struct NewListing {
    pub provider_id: String,
    pub provider_name: String,
    pub category: FoodCategory,
    pub description: String,
    pub quantity: f64,
    pub unit: QuantityUnit,
    pub expires_at: DateTime<Utc>,
    pub location: GeoPoint,
}

/// Fields an organization supplies when publishing an impact report
#[derive(Debug, Clone)]
pub struct NewImpactReport {
    pub ngo_id: String,
    pub title: String,
    pub description: String,
    pub meals_served: u32,
    pub people_impacted: u32,
    pub image_urls: Vec<String>,
    pub donation_id: Option<String>,
}

#[derive(Debug, Default)]
struct StoreState {
    listings: Vec<FoodListing>,
    organizations: Vec<Organization>,
    requests: Vec<PickupRequest>,
    donations: Vec<Donation>,
    impact_reports: Vec<ImpactReport>,
}

impl StoreState {
    fn listing_mut(&mut self, id: &str) -> Result<&mut FoodListing, StoreError> {
        self.listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::ListingNotFound(id.to_string()))
    }

    fn organization(&self, id: &str) -> Result<&Organization, StoreError> {
        self.organizations
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::OrganizationNotFound(id.to_string()))
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// In-memory state for listings, pickup requests, donations and impact reports
///
/// Every read returns owned snapshots so callers never hold the lock across
/// core computations.
#[derive(Debug, Default)]
pub struct PlatefulStore {
    state: RwLock<StoreState>,
}

impl PlatefulStore {
    /// Store holding the given listings and organizations
    pub fn with_data(listings: Vec<FoodListing>, organizations: Vec<Organization>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                listings,
                organizations,
                ..Default::default()
            }),
        }
    }

    /// Store preloaded with Mumbai demo data, expiries relative to `now`
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let organizations = vec![
            Organization {
                id: "sharer1".to_string(),
                name: "Helping Hands NGO".to_string(),
                location: GeoPoint { latitude: 19.066, longitude: 72.867 },
                verified: true,
            },
            Organization {
                id: "sharer2".to_string(),
                name: "Annapurna Food Bank".to_string(),
                location: GeoPoint { latitude: 19.100, longitude: 72.850 },
                verified: true,
            },
            Organization {
                id: "sharer3".to_string(),
                name: "Thane Community Kitchen".to_string(),
                location: GeoPoint { latitude: 19.218, longitude: 72.978 },
                verified: false,
            },
        ];

        let listings = vec![
            FoodListing {
                id: "food1".to_string(),
                provider_id: "giver1".to_string(),
                provider_name: "Food For All Restaurant".to_string(),
                category: FoodCategory::Prepared,
                description: "Leftover rice and curry dishes, still fresh and warm".to_string(),
                quantity: 15.0,
                unit: QuantityUnit::Servings,
                expires_at: now + Duration::hours(6),
                created_at: now - Duration::hours(1),
                location: GeoPoint { latitude: 19.076, longitude: 72.877 },
                status: ListingStatus::Available,
            },
            FoodListing {
                id: "food2".to_string(),
                provider_id: "giver2".to_string(),
                provider_name: "Green Harvest Grocers".to_string(),
                category: FoodCategory::Raw,
                description: "Fresh vegetables that are slightly bruised but perfectly edible"
                    .to_string(),
                quantity: 10.0,
                unit: QuantityUnit::Kg,
                expires_at: now + Duration::hours(56),
                created_at: now - Duration::hours(3),
                location: GeoPoint { latitude: 19.086, longitude: 72.887 },
                status: ListingStatus::Available,
            },
            FoodListing {
                id: "food3".to_string(),
                provider_id: "giver1".to_string(),
                provider_name: "Food For All Restaurant".to_string(),
                category: FoodCategory::Prepared,
                description: "Freshly prepared extra biryani from a catering event".to_string(),
                quantity: 25.0,
                unit: QuantityUnit::Servings,
                expires_at: now + Duration::hours(8),
                created_at: now,
                location: GeoPoint { latitude: 19.076, longitude: 72.877 },
                status: ListingStatus::Requested,
            },
        ];

        let requests = vec![PickupRequest {
            id: "req1".to_string(),
            listing_id: "food3".to_string(),
            ngo_id: "sharer1".to_string(),
            ngo_name: "Helping Hands NGO".to_string(),
            status: RequestStatus::Pending,
            created_at: now,
            pickup_time: None,
            distance_km: Some(distance_km(organizations[0].location, listings[2].location)),
        }];

        let donations = vec![Donation {
            id: "don1".to_string(),
            donor_id: "donor1".to_string(),
            ngo_id: "sharer1".to_string(),
            ngo_name: "Helping Hands NGO".to_string(),
            amount: 5000.0,
            recurring: true,
            purpose: DonationPurpose::Food,
            created_at: now - Duration::days(9),
        }];

        let impact_reports = vec![ImpactReport {
            id: "imp1".to_string(),
            ngo_id: "sharer1".to_string(),
            title: "July Food Distribution".to_string(),
            description: "Distributed meals to families in Mumbai".to_string(),
            meals_served: 150,
            people_impacted: 50,
            image_urls: vec![],
            donation_id: Some("don1".to_string()),
            created_at: now - Duration::days(5),
        }];

        Self {
            state: RwLock::new(StoreState {
                listings,
                organizations,
                requests,
                donations,
                impact_reports,
            }),
        }
    }

    pub async fn listings(&self) -> Vec<FoodListing> {
        self.state.read().await.listings.clone()
    }

    pub async fn listing(&self, id: &str) -> Result<FoodListing, StoreError> {
        self.state
            .read()
            .await
            .listings
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| StoreError::ListingNotFound(id.to_string()))
    }

    pub async fn listings_by_provider(&self, provider_id: &str) -> Vec<FoodListing> {
        self.state
            .read()
            .await
            .listings
            .iter()
            .filter(|l| l.provider_id == provider_id)
            .cloned()
            .collect()
    }

    /// Publish a listing as available
    pub async fn add_listing(&self, new: NewListing, now: DateTime<Utc>) -> FoodListing {
        let listing = FoodListing {
            id: new_id(),
            provider_id: new.provider_id,
            provider_name: new.provider_name,
            category: new.category,
            description: new.description,
            quantity: new.quantity,
            unit: new.unit,
            expires_at: new.expires_at,
            created_at: now,
            location: new.location,
            status: ListingStatus::Available,
        };

        self.state.write().await.listings.push(listing.clone());
        tracing::info!("Listing {} published by {}", listing.id, listing.provider_id);
        listing
    }

    pub async fn organizations(&self) -> Vec<Organization> {
        self.state.read().await.organizations.clone()
    }

    pub async fn organization(&self, id: &str) -> Result<Organization, StoreError> {
        self.state.read().await.organization(id).cloned()
    }

    /// Request pickup of an available listing, marking it requested
    pub async fn create_request(
        &self,
        listing_id: &str,
        ngo_id: &str,
        now: DateTime<Utc>,
    ) -> Result<PickupRequest, StoreError> {
        let mut state = self.state.write().await;

        let organization = state.organization(ngo_id)?.clone();
        let listing = state.listing_mut(listing_id)?;
        if !listing.is_available() {
            return Err(StoreError::ListingUnavailable(listing_id.to_string()));
        }
        listing.status = ListingStatus::Requested;
        let distance = distance_km(organization.location, listing.location);

        let request = PickupRequest {
            id: new_id(),
            listing_id: listing_id.to_string(),
            ngo_id: organization.id,
            ngo_name: organization.name,
            status: RequestStatus::Pending,
            created_at: now,
            pickup_time: None,
            distance_km: Some(distance),
        };
        state.requests.push(request.clone());

        tracing::info!(
            "Pickup request {} created: {} -> {} ({:.2} km)",
            request.id,
            request.ngo_id,
            listing_id,
            distance
        );
        Ok(request)
    }

    /// Move a request to `status`, updating the listing it targets
    ///
    /// Completed requests claim the listing, rejected ones release it.
    pub async fn update_request(
        &self,
        id: &str,
        status: RequestStatus,
        now: DateTime<Utc>,
    ) -> Result<PickupRequest, StoreError> {
        let mut state = self.state.write().await;

        let index = state
            .requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::RequestNotFound(id.to_string()))?;

        if matches!(state.requests[index].status, RequestStatus::Completed | RequestStatus::Rejected) {
            return Err(StoreError::RequestClosed(id.to_string()));
        }

        let listing_status = match status {
            RequestStatus::Completed => Some(ListingStatus::Claimed),
            RequestStatus::Rejected => Some(ListingStatus::Available),
            RequestStatus::Pending | RequestStatus::Accepted => None,
        };
        let listing_id = state.requests[index].listing_id.clone();
        let listing = state.listing_mut(&listing_id)?;
        if let Some(listing_status) = listing_status {
            listing.status = listing_status;
        }

        let request = &mut state.requests[index];
        request.status = status;
        if status == RequestStatus::Completed {
            request.pickup_time = Some(now);
        }
        let updated = request.clone();

        tracing::info!("Pickup request {} is now {:?}", id, status);
        Ok(updated)
    }

    pub async fn requests_by_ngo(&self, ngo_id: &str) -> Vec<PickupRequest> {
        self.state
            .read()
            .await
            .requests
            .iter()
            .filter(|r| r.ngo_id == ngo_id)
            .cloned()
            .collect()
    }

    /// Requests against a provider's listings, each with its listing
    pub async fn requests_for_provider(&self, provider_id: &str) -> Vec<(PickupRequest, FoodListing)> {
        let state = self.state.read().await;

        state
            .requests
            .iter()
            .filter_map(|request| {
                state
                    .listings
                    .iter()
                    .find(|l| l.id == request.listing_id && l.provider_id == provider_id)
                    .map(|listing| (request.clone(), listing.clone()))
            })
            .collect()
    }

    pub async fn add_donation(
        &self,
        donor_id: &str,
        ngo_id: &str,
        amount: f64,
        recurring: bool,
        purpose: DonationPurpose,
        now: DateTime<Utc>,
    ) -> Result<Donation, StoreError> {
        let mut state = self.state.write().await;
        let organization = state.organization(ngo_id)?.clone();

        let donation = Donation {
            id: new_id(),
            donor_id: donor_id.to_string(),
            ngo_id: organization.id,
            ngo_name: organization.name,
            amount,
            recurring,
            purpose,
            created_at: now,
        };
        state.donations.push(donation.clone());

        tracing::info!("Donation {} of {:.2} to {}", donation.id, amount, ngo_id);
        Ok(donation)
    }

    pub async fn donations_by_donor(&self, donor_id: &str) -> Vec<Donation> {
        self.state
            .read()
            .await
            .donations
            .iter()
            .filter(|d| d.donor_id == donor_id)
            .cloned()
            .collect()
    }

    pub async fn total_donations(&self, ngo_id: &str) -> f64 {
        self.state
            .read()
            .await
            .donations
            .iter()
            .filter(|d| d.ngo_id == ngo_id)
            .map(|d| d.amount)
            .sum()
    }

    pub async fn add_impact_report(
        &self,
        new: NewImpactReport,
        now: DateTime<Utc>,
    ) -> Result<ImpactReport, StoreError> {
        let mut state = self.state.write().await;
        state.organization(&new.ngo_id)?;

        let report = ImpactReport {
            id: new_id(),
            ngo_id: new.ngo_id,
            title: new.title,
            description: new.description,
            meals_served: new.meals_served,
            people_impacted: new.people_impacted,
            image_urls: new.image_urls,
            donation_id: new.donation_id,
            created_at: now,
        };
        state.impact_reports.push(report.clone());

        tracing::info!("Impact report {} published by {}", report.id, report.ngo_id);
        Ok(report)
    }

    pub async fn total_impact(&self, ngo_id: &str) -> ImpactTotals {
        self.state
            .read()
            .await
            .impact_reports
            .iter()
            .filter(|r| r.ngo_id == ngo_id)
            .fold(ImpactTotals::default(), |mut totals, r| {
                totals.meals_served += u64::from(r.meals_served);
                totals.people_impacted += u64::from(r.people_impacted);
                totals
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_listing() -> NewListing {
        NewListing {
            provider_id: "giver2".to_string(),
            provider_name: "Green Harvest Grocers".to_string(),
            category: FoodCategory::Raw,
            description: "Bananas".to_string(),
            quantity: 4.0,
            unit: QuantityUnit::Kg,
            expires_at: Utc::now() + Duration::hours(30),
            location: GeoPoint { latitude: 19.086, longitude: 72.887 },
        }
    }

    #[tokio::test]
    async fn test_add_listing_is_available() {
        let store = PlatefulStore::seeded(Utc::now());
        let listing = store.add_listing(new_listing(), Utc::now()).await;

        assert_eq!(listing.status, ListingStatus::Available);
        assert_eq!(store.listings().await.len(), 4);
        assert_eq!(store.listings_by_provider("giver2").await.len(), 2);
    }

    #[tokio::test]
    async fn test_request_lifecycle() {
        let store = PlatefulStore::seeded(Utc::now());

        let request = store.create_request("food1", "sharer2", Utc::now()).await.unwrap();
        assert_eq!(request.ngo_name, "Annapurna Food Bank");
        assert!(request.distance_km.unwrap() > 0.0);
        assert_eq!(store.listing("food1").await.unwrap().status, ListingStatus::Requested);

        store.update_request(&request.id, RequestStatus::Completed, Utc::now()).await.unwrap();
        assert_eq!(store.listing("food1").await.unwrap().status, ListingStatus::Claimed);

        let err = store
            .update_request(&request.id, RequestStatus::Rejected, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::RequestClosed(_)));
    }

    #[tokio::test]
    async fn test_update_with_missing_listing_leaves_request_untouched() {
        let store = PlatefulStore::seeded(Utc::now());
        store.state.write().await.listings.retain(|l| l.id != "food3");

        let err = store
            .update_request("req1", RequestStatus::Completed, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ListingNotFound(_)));

        let requests = store.requests_by_ngo("sharer1").await;
        assert_eq!(requests[0].status, RequestStatus::Pending);
        assert!(requests[0].pickup_time.is_none());
    }

    #[tokio::test]
    async fn test_rejection_releases_listing() {
        let store = PlatefulStore::seeded(Utc::now());

        store.update_request("req1", RequestStatus::Rejected, Utc::now()).await.unwrap();
        assert_eq!(store.listing("food3").await.unwrap().status, ListingStatus::Available);
    }

    #[tokio::test]
    async fn test_cannot_request_unavailable_listing() {
        let store = PlatefulStore::seeded(Utc::now());

        let err = store.create_request("food3", "sharer2", Utc::now()).await.unwrap_err();
        assert!(matches!(err, StoreError::ListingUnavailable(_)));

        let err = store.create_request("food1", "nobody", Utc::now()).await.unwrap_err();
        assert!(matches!(err, StoreError::OrganizationNotFound(_)));
    }

    #[tokio::test]
    async fn test_requests_for_provider() {
        let store = PlatefulStore::seeded(Utc::now());

        let entries = store.requests_for_provider("giver1").await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1.id, "food3");
        assert!(store.requests_for_provider("giver2").await.is_empty());
        assert_eq!(store.requests_by_ngo("sharer1").await.len(), 1);
    }

    #[tokio::test]
    async fn test_donation_and_impact_totals() {
        let store = PlatefulStore::seeded(Utc::now());

        store
            .add_donation("donor1", "sharer1", 1500.0, false, DonationPurpose::Logistics, Utc::now())
            .await
            .unwrap();
        assert_eq!(store.total_donations("sharer1").await, 6500.0);
        assert_eq!(store.donations_by_donor("donor1").await.len(), 2);

        store
            .add_impact_report(
                NewImpactReport {
                    ngo_id: "sharer1".to_string(),
                    title: "August Distribution".to_string(),
                    description: String::new(),
                    meals_served: 50,
                    people_impacted: 20,
                    image_urls: vec![],
                    donation_id: None,
                },
                Utc::now(),
            )
            .await
            .unwrap();

        let totals = store.total_impact("sharer1").await;
        assert_eq!(totals, ImpactTotals { meals_served: 200, people_impacted: 70 });
    }
}
