use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use super::{core_error, error_response, store_error, validation_failed, AppState};
use crate::core::{filter_listings, nearby_with_distance, parse_expiry, score_all, ListingQuery};
use crate::models::{
    CreateListingRequest, DistancedListing, DistancedOrganization, FoodListing, GeoPoint,
    ListingsQuery, ListingsResponse, NearbyListingsResponse, NearbyOrganizationsResponse,
    NearbyQuery, OrganizationsNearQuery, ScoredListing, UrgentListingsResponse, UrgentQuery,
};
use crate::services::NewListing;

const DEFAULT_URGENT_LIMIT: usize = 20;

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/listings", web::get().to(list_listings))
        .route("/listings", web::post().to(create_listing))
        .route("/listings/nearby", web::get().to(nearby_listings))
        .route("/listings/urgent", web::get().to(urgent_listings))
        .route("/listings/{id}/organizations", web::get().to(nearby_organizations));
}

/// Browse listings
///
/// GET /api/v1/listings?providerId=giver1&category=prepared&search=rice&includeUnavailable=false
async fn list_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingsQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = ListingQuery {
        category: query.category,
        search: query.search,
        include_unavailable: query.include_unavailable,
    };

    let all = match &query.provider_id {
        Some(provider_id) => state.store.listings_by_provider(provider_id).await,
        None => state.store.listings().await,
    };
    let listings: Vec<FoodListing> = filter_listings(&all, &filter).into_iter().cloned().collect();

    HttpResponse::Ok().json(ListingsResponse {
        total: listings.len(),
        listings,
    })
}

/// Publish a listing
///
/// POST /api/v1/listings
///
/// Request body:
/// ```json
/// {
///   "providerId": "string",
///   "providerName": "string",
///   "category": "prepared|raw",
///   "description": "string",
///   "quantity": 15,
///   "unit": "servings|kg|g",
///   "expiresAt": "2025-07-10T18:00:00Z",
///   "lat": 19.076,
///   "lng": 72.877
/// }
/// ```
async fn create_listing(
    state: web::Data<AppState>,
    req: web::Json<CreateListingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }
    let req = req.into_inner();

    let expires_at = match parse_expiry(&req.expires_at) {
        Ok(ts) => ts,
        Err(e) => return core_error(e),
    };
    let location = match GeoPoint::new(req.lat, req.lng) {
        Ok(point) => point,
        Err(e) => return core_error(e),
    };

    let listing = state
        .store
        .add_listing(
            NewListing {
                provider_id: req.provider_id,
                provider_name: req.provider_name,
                category: req.category,
                description: req.description,
                quantity: req.quantity,
                unit: req.unit,
                expires_at,
                location,
            },
            chrono::Utc::now(),
        )
        .await;

    HttpResponse::Created().json(listing)
}

/// Available listings near a point, nearest first
///
/// GET /api/v1/listings/nearby?lat=19.07&lng=72.87&radiusKm=5&category=raw
async fn nearby_listings(
    state: web::Data<AppState>,
    query: web::Query<NearbyQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }
    let origin = match GeoPoint::new(query.lat, query.lng) {
        Ok(point) => point,
        Err(e) => return core_error(e),
    };
    let radius_km = state.proximity.effective_radius(query.radius_km);

    let filter = ListingQuery {
        category: query.category,
        ..Default::default()
    };
    let all = state.store.listings().await;
    let visible: Vec<&FoodListing> = filter_listings(&all, &filter);

    let listings: Vec<DistancedListing> = nearby_with_distance(origin, &visible, radius_km)
        .into_iter()
        .map(|n| DistancedListing {
            listing: (**n.entity).clone(),
            distance_km: n.distance_km,
        })
        .collect();

    tracing::debug!(
        "Found {} listings within {} km of ({}, {})",
        listings.len(),
        radius_km,
        origin.latitude,
        origin.longitude
    );

    HttpResponse::Ok().json(NearbyListingsResponse {
        origin,
        radius_km,
        listings,
    })
}

/// Available listings, most perishable first
///
/// GET /api/v1/listings/urgent?limit=10
async fn urgent_listings(
    state: web::Data<AppState>,
    query: web::Query<UrgentQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }
    let limit = query.limit.unwrap_or(DEFAULT_URGENT_LIMIT);
    let now = chrono::Utc::now();

    let all = state.store.listings().await;
    let available: Vec<&FoodListing> = filter_listings(&all, &ListingQuery::default());

    let listings: Vec<ScoredListing> = score_all(&available, now)
        .into_iter()
        .take(limit)
        .map(|(listing, score)| ScoredListing {
            listing: (**listing).clone(),
            perishability_score: score,
        })
        .collect();

    HttpResponse::Ok().json(UrgentListingsResponse {
        listings,
        scored_at: now,
    })
}

/// Organizations that could collect a listing, nearest first
///
/// GET /api/v1/listings/{id}/organizations?radiusKm=10
async fn nearby_organizations(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OrganizationsNearQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }
    let listing_id = path.into_inner();

    let listing = match state.store.listing(&listing_id).await {
        Ok(listing) => listing,
        Err(e) => return store_error(e),
    };
    if !listing.location.is_valid() {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Invalid coordinate",
            format!("Listing {} has no usable location", listing_id),
        );
    }

    let radius_km = state.proximity.effective_radius(query.radius_km);
    let organizations = state.store.organizations().await;

    let organizations: Vec<DistancedOrganization> =
        nearby_with_distance(listing.location, &organizations, radius_km)
            .into_iter()
            .map(|n| DistancedOrganization {
                organization: n.entity.clone(),
                distance_km: n.distance_km,
            })
            .collect();

    HttpResponse::Ok().json(NearbyOrganizationsResponse {
        listing_id,
        organizations,
    })
}
