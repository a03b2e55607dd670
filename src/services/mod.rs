// Service exports
pub mod store;

pub use store::{NewImpactReport, NewListing, PlatefulStore, StoreError};
