use crate::models::{FoodCategory, FoodListing};

/// Browse filters for the listing map
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub category: Option<FoodCategory>,
    pub search: Option<String>,
    pub include_unavailable: bool,
}

/// Check if a listing passes the browse filters
///
/// Only available listings are shown unless `include_unavailable` is set.
/// The search term matches description or provider name, ignoring case.
#[inline]
pub fn matches_listing(listing: &FoodListing, query: &ListingQuery) -> bool {
    if !query.include_unavailable && !listing.is_available() {
        return false;
    }

    if let Some(category) = query.category {
        if listing.category != category {
            return false;
        }
    }

    match query.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => {
            let term = term.to_lowercase();
            listing.description.to_lowercase().contains(&term)
                || listing.provider_name.to_lowercase().contains(&term)
        }
        _ => true,
    }
}

/// Apply the browse filters, preserving input order
pub fn filter_listings<'a>(listings: &'a [FoodListing], query: &ListingQuery) -> Vec<&'a FoodListing> {
    listings
        .iter()
        .filter(|listing| matches_listing(listing, query))
        .collect()
}
