// Route exports
pub mod listings;
pub mod organizations;
pub mod pickups;

use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::config::ProximitySettings;
use crate::core::PickupPlanner;
use crate::error::CoreError;
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{PlatefulStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlatefulStore>,
    pub planner: PickupPlanner,
    pub proximity: ProximitySettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(listings::configure)
            .configure(pickups::configure)
            .configure(organizations::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
}

pub(crate) fn core_error(err: CoreError) -> HttpResponse {
    let error = match err {
        CoreError::InvalidCoordinate { .. } => "Invalid coordinate",
        CoreError::InvalidTimestamp(_) => "Invalid timestamp",
    };
    error_response(StatusCode::BAD_REQUEST, error, err.to_string())
}

pub(crate) fn store_error(err: StoreError) -> HttpResponse {
    let (status, error) = match err {
        StoreError::ListingNotFound(_) => (StatusCode::NOT_FOUND, "Listing not found"),
        StoreError::RequestNotFound(_) => (StatusCode::NOT_FOUND, "Request not found"),
        StoreError::OrganizationNotFound(_) => (StatusCode::NOT_FOUND, "Organization not found"),
        StoreError::ListingUnavailable(_) => (StatusCode::CONFLICT, "Listing unavailable"),
        StoreError::RequestClosed(_) => (StatusCode::CONFLICT, "Request closed"),
    };
    tracing::info!("Store rejected operation: {}", err);
    error_response(status, error, err.to_string())
}
