use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{store_error, validation_failed, AppState};
use crate::models::{
    CreateDonationRequest, CreateImpactReportRequest, DonationsResponse, ListDonationsQuery,
    OrganizationSummaryResponse,
};
use crate::services::NewImpactReport;

/// Configure donation and impact routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/donations", web::get().to(list_donations))
        .route("/donations", web::post().to(create_donation))
        .route("/impact-reports", web::post().to(create_impact_report))
        .route("/organizations/{id}/summary", web::get().to(organization_summary));
}

/// Record a monetary donation
///
/// POST /api/v1/donations
async fn create_donation(
    state: web::Data<AppState>,
    req: web::Json<CreateDonationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state
        .store
        .add_donation(
            &req.donor_id,
            &req.ngo_id,
            req.amount,
            req.recurring,
            req.purpose,
            chrono::Utc::now(),
        )
        .await
    {
        Ok(donation) => HttpResponse::Created().json(donation),
        Err(e) => store_error(e),
    }
}

/// Donation history for a donor
///
/// GET /api/v1/donations?donorId=donor1
async fn list_donations(
    state: web::Data<AppState>,
    query: web::Query<ListDonationsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let donations = state.store.donations_by_donor(&query.donor_id).await;

    HttpResponse::Ok().json(DonationsResponse {
        total: donations.len(),
        donations,
    })
}

/// Publish an impact report
///
/// POST /api/v1/impact-reports
async fn create_impact_report(
    state: web::Data<AppState>,
    req: web::Json<CreateImpactReportRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }
    let req = req.into_inner();

    let new = NewImpactReport {
        ngo_id: req.ngo_id,
        title: req.title,
        description: req.description,
        meals_served: req.meals_served,
        people_impacted: req.people_impacted,
        image_urls: req.image_urls,
        donation_id: req.donation_id,
    };

    match state.store.add_impact_report(new, chrono::Utc::now()).await {
        Ok(report) => HttpResponse::Created().json(report),
        Err(e) => store_error(e),
    }
}

/// Donation and impact totals for an organization
///
/// GET /api/v1/organizations/{id}/summary
async fn organization_summary(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let organization = match state.store.organization(&path).await {
        Ok(organization) => organization,
        Err(e) => return store_error(e),
    };

    let total_donations = state.store.total_donations(&organization.id).await;
    let impact = state.store.total_impact(&organization.id).await;

    HttpResponse::Ok().json(OrganizationSummaryResponse {
        organization,
        total_donations,
        impact,
    })
}
