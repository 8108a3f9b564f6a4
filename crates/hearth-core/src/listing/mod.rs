//! Listing domain module.
//!
//! # Module Structure
//!
//! - `model`: listing domain models (`PropertySummary`, `PropertyDetail`,
//!   `ListingStatus`)
//! - `provider`: the `ListingProvider` trait implemented by the remote
//!   properties client

mod model;
mod provider;

// Re-export public API
pub use model::{ListingStatus, PropertyDetail, PropertySummary};
pub use provider::ListingProvider;
