//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::ListingId;

use crate::domain::entities::{Listing, NewListing};
use crate::domain::value_objects::{ListingFilters, ReviewDecision};
use crate::error::ListingResult;

/// Listing repository trait
///
/// Only two mutations exist: full create and status-only transition.
#[trait_variant::make(ListingRepository: Send)]
pub trait LocalListingRepository {
    /// Persist a new listing; it always starts pending
    async fn create(&self, listing: NewListing) -> ListingResult<Listing>;

    /// Approved listings matching every present filter, newest first
    async fn find_approved(&self, filters: &ListingFilters) -> ListingResult<Vec<Listing>>;

    /// Every listing regardless of status, newest first
    async fn find_all(&self) -> ListingResult<Vec<Listing>>;

    async fn find_by_id(&self, id: ListingId) -> ListingResult<Option<Listing>>;

    /// Atomically set the status; `None` if no such listing
    async fn update_status(
        &self,
        id: ListingId,
        decision: ReviewDecision,
    ) -> ListingResult<Option<Listing>>;
}
