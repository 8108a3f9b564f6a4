//! Listing provider trait.
//!
//! Defines the interface for the two dependent listing fetch operations.

use async_trait::async_trait;

use super::model::{PropertyDetail, PropertySummary};
use crate::error::Result;

/// An abstract provider for listing data.
///
/// This trait decouples the dashboard controller from the HTTP client so
/// the controller's state transitions can be tested against mock
/// providers.
///
/// # Implementation Notes
///
/// Implementations must:
/// - verify a session exists before issuing any network request, failing
///   with [`HearthError::Unauthenticated`](crate::HearthError::Unauthenticated)
///   otherwise;
/// - issue exactly one network request per invocation;
/// - never cancel an in-flight request — stale settlements are the
///   caller's concern.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Retrieves the full collection of summary records.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<PropertySummary>)`: the complete, possibly empty, collection
    /// - `Err(_)`: a fetch-level error (unauthenticated, request failed,
    ///   malformed response, transport)
    async fn fetch_summaries(&self) -> Result<Vec<PropertySummary>>;

    /// Retrieves one enriched record.
    ///
    /// # Arguments
    ///
    /// * `property_id` - The identifier of the property to fetch
    ///
    /// # Returns
    ///
    /// - `Ok(PropertyDetail)`: the enriched record
    /// - `Err(_)`: a fetch-level error; an unknown identifier yields
    ///   [`HearthError::NotFound`](crate::HearthError::NotFound)
    async fn fetch_detail(&self, property_id: &str) -> Result<PropertyDetail>;
}
