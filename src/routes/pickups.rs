use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::collections::HashSet;
use validator::Validate;

use super::{core_error, error_response, store_error, validation_failed, AppState};
use crate::core::{route_length_km, sequence_route};
use crate::models::{
    CreatePickupRequest, GeoPoint, ListRequestsQuery, PickupPlanResponse, PlanPickupsRequest,
    ProviderRequestEntry, RouteResponse, SequenceRouteRequest, UpdatePickupRequest,
};

/// Configure pickup planning and request routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/pickups/plan", web::post().to(plan_pickups))
        .route("/pickups/route", web::post().to(sequence_pickups))
        .route("/requests", web::get().to(list_requests))
        .route("/requests", web::post().to(create_request))
        .route("/requests/{id}", web::patch().to(update_request));
}

/// Plan a pickup run around an organization
///
/// POST /api/v1/pickups/plan
///
/// Request body:
/// ```json
/// {
///   "lat": 19.066,
///   "lng": 72.867,
///   "radiusKm": 10,
///   "maxStops": 5
/// }
/// ```
async fn plan_pickups(
    state: web::Data<AppState>,
    req: web::Json<PlanPickupsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }
    let start = match GeoPoint::new(req.lat, req.lng) {
        Ok(point) => point,
        Err(e) => return core_error(e),
    };
    let radius_km = state.proximity.effective_radius(req.radius_km);

    let listings = state.store.listings().await;
    let plan = state
        .planner
        .plan(start, &listings, Some(radius_km), req.max_stops, chrono::Utc::now());

    tracing::info!(
        "Planned {} stops ({:.2} km) from {} candidates",
        plan.stops.len(),
        plan.total_distance_km,
        plan.candidates_considered
    );

    HttpResponse::Ok().json(PickupPlanResponse {
        stops: plan.stops,
        total_distance_km: plan.total_distance_km,
        candidates_considered: plan.candidates_considered,
    })
}

/// Order a chosen set of listings into a visiting sequence
///
/// POST /api/v1/pickups/route
///
/// Request body:
/// ```json
/// {
///   "lat": 19.066,
///   "lng": 72.867,
///   "listingIds": ["food1", "food2"]
/// }
/// ```
async fn sequence_pickups(
    state: web::Data<AppState>,
    req: web::Json<SequenceRouteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }
    let start = match GeoPoint::new(req.lat, req.lng) {
        Ok(point) => point,
        Err(e) => return core_error(e),
    };

    let mut seen = HashSet::new();
    let mut stops = Vec::with_capacity(req.listing_ids.len());
    for id in req.listing_ids.iter().filter(|id| seen.insert(id.as_str())) {
        match state.store.listing(id).await {
            Ok(listing) => stops.push(listing),
            Err(e) => return store_error(e),
        }
    }

    let route = sequence_route(start, &stops);
    let total_distance_km = route_length_km(start, &route);

    HttpResponse::Ok().json(RouteResponse {
        stops: route.into_iter().cloned().collect(),
        total_distance_km,
    })
}

/// Request pickup of a listing
///
/// POST /api/v1/requests
async fn create_request(
    state: web::Data<AppState>,
    req: web::Json<CreatePickupRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state
        .store
        .create_request(&req.listing_id, &req.ngo_id, chrono::Utc::now())
        .await
    {
        Ok(request) => HttpResponse::Created().json(request),
        Err(e) => store_error(e),
    }
}

/// Update a pickup request's status
///
/// PATCH /api/v1/requests/{id}
async fn update_request(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdatePickupRequest>,
) -> impl Responder {
    match state
        .store
        .update_request(&path, req.status, chrono::Utc::now())
        .await
    {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => store_error(e),
    }
}

/// List pickup requests for an organization or a provider
///
/// GET /api/v1/requests?ngoId={id}
/// GET /api/v1/requests?providerId={id}
async fn list_requests(
    state: web::Data<AppState>,
    query: web::Query<ListRequestsQuery>,
) -> impl Responder {
    match (&query.ngo_id, &query.provider_id) {
        (Some(ngo_id), None) => HttpResponse::Ok().json(state.store.requests_by_ngo(ngo_id).await),
        (None, Some(provider_id)) => {
            let entries: Vec<ProviderRequestEntry> = state
                .store
                .requests_for_provider(provider_id)
                .await
                .into_iter()
                .map(|(request, listing)| ProviderRequestEntry { request, listing })
                .collect();
            HttpResponse::Ok().json(entries)
        }
        _ => error_response(
            StatusCode::BAD_REQUEST,
            "Invalid query",
            "Exactly one of ngoId or providerId is required".to_string(),
        ),
    }
}
