//! Browse Listings Use Case
//!
//! Public reads. Never fails: a store failure degrades to an empty result.

use crate::domain::entities::Listing;
use crate::domain::repository::ListingRepository;
use crate::domain::value_objects::ListingFilters;
use kernel::id::ListingId;
use std::sync::Arc;

/// Browse Listings Use Case
pub struct BrowseListingsUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
}

impl<R> BrowseListingsUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Approved listings matching `filters`, newest first
    pub async fn execute(&self, filters: &ListingFilters) -> Vec<Listing> {
        match self.repo.find_approved(filters).await {
            Ok(listings) => listings,
            Err(e) => {
                tracing::warn!(error = %e, "Public listing read failed, returning empty result");
                Vec::new()
            }
        }
    }

    /// Single listing by id; absent when missing or the store is down
    pub async fn get(&self, id: ListingId) -> Option<Listing> {
        match self.repo.find_by_id(id).await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!(error = %e, listing_id = %id, "Listing lookup failed");
                None
            }
        }
    }
}
