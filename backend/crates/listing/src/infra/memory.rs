//! In-memory repository used by the crate's tests

use crate::domain::entities::{Listing, NewListing};
use crate::domain::repository::ListingRepository;
use crate::domain::value_objects::{ListingFilters, ReviewDecision};
use crate::error::{ListingError, ListingResult};
use kernel::id::ListingId;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Vec-backed repository with an outage switch
#[derive(Default)]
pub struct InMemoryListingRepository {
    rows: RwLock<Vec<Listing>>,
    down: AtomicBool,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StorageUnavailable`
    pub fn set_unavailable(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    /// Insert a fully formed row, bypassing `create`
    pub async fn insert(&self, listing: Listing) {
        self.rows.write().await.push(listing);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    fn check(&self) -> ListingResult<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(ListingError::unconfigured())
        } else {
            Ok(())
        }
    }
}

fn contains(field: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|n| {
        field
            .to_lowercase()
            .contains(&n.trim().to_lowercase())
    })
}

fn matches(listing: &Listing, filters: &ListingFilters) -> bool {
    contains(&listing.category, filters.category())
        && contains(&listing.location, filters.location())
        && contains(&listing.brand, filters.brand())
        && contains(&listing.model, filters.model())
        && filters.year().is_none_or(|y| {
            listing
                .year
                .is_some_and(|year| year.to_string() == y.trim())
        })
}

fn newest_first(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listings
}

impl ListingRepository for InMemoryListingRepository {
    async fn create(&self, new: NewListing) -> ListingResult<Listing> {
        self.check()?;
        let listing = Listing::create(new);
        self.rows.write().await.push(listing.clone());
        Ok(listing)
    }

    async fn find_approved(&self, filters: &ListingFilters) -> ListingResult<Vec<Listing>> {
        self.check()?;
        let rows = self.rows.read().await;
        Ok(newest_first(
            rows.iter()
                .filter(|l| l.is_public() && matches(l, filters))
                .cloned()
                .collect(),
        ))
    }

    async fn find_all(&self) -> ListingResult<Vec<Listing>> {
        self.check()?;
        Ok(newest_first(self.rows.read().await.clone()))
    }

    async fn find_by_id(&self, id: ListingId) -> ListingResult<Option<Listing>> {
        self.check()?;
        Ok(self.rows.read().await.iter().find(|l| l.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: ListingId,
        decision: ReviewDecision,
    ) -> ListingResult<Option<Listing>> {
        self.check()?;
        let mut rows = self.rows.write().await;
        Ok(rows.iter_mut().find(|l| l.id == id).map(|l| {
            l.status = decision.status();
            l.clone()
        }))
    }
}
