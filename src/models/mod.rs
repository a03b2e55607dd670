// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Donation, DonationPurpose, FoodCategory, FoodListing, GeoPoint, ImpactReport, ImpactTotals,
    ListingStatus, Located, Organization, Perishable, PerishableItem, PickupRequest, PlannedStop,
    PlannerOptions, QuantityUnit, RequestStatus,
};
pub use requests::{
    CreateDonationRequest, CreateImpactReportRequest, CreateListingRequest, CreatePickupRequest,
    ListDonationsQuery, ListRequestsQuery, ListingsQuery, NearbyQuery, OrganizationsNearQuery, PlanPickupsRequest,
    SequenceRouteRequest, UpdatePickupRequest, UrgentQuery,
};
pub use responses::{
    DistancedListing, DistancedOrganization, DonationsResponse, ErrorResponse, HealthResponse, ListingsResponse,
    NearbyListingsResponse, NearbyOrganizationsResponse, OrganizationSummaryResponse,
    PickupPlanResponse, ProviderRequestEntry, RouteResponse, ScoredListing, UrgentListingsResponse,
};
