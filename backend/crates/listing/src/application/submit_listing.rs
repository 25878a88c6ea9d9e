//! Submit Listing Use Case

use crate::application::admit;
use crate::application::config::ListingConfig;
use crate::domain::entities::Listing;
use crate::domain::repository::ListingRepository;
use crate::domain::services::{ListingDraft, validate_draft};
use crate::error::ListingResult;
use platform::rate_limit::RateLimitStore;
use std::sync::Arc;

/// Submit Listing Use Case
///
/// Order: validation, limiter on the client, insert.
pub struct SubmitListingUseCase<R, L>
where
    R: ListingRepository,
    L: RateLimitStore,
{
    repo: Arc<R>,
    limiter: Arc<L>,
    config: Arc<ListingConfig>,
}

impl<R, L> SubmitListingUseCase<R, L>
where
    R: ListingRepository,
    L: RateLimitStore,
{
    pub fn new(repo: Arc<R>, limiter: Arc<L>, config: Arc<ListingConfig>) -> Self {
        Self {
            repo,
            limiter,
            config,
        }
    }

    pub async fn execute(&self, client_key: &str, draft: ListingDraft) -> ListingResult<Listing> {
        let new_listing = validate_draft(draft)?;

        admit(self.limiter.as_ref(), client_key, &self.config.submit_limit).await?;

        let listing = self.repo.create(new_listing).await?;

        tracing::info!(
            listing_id = %listing.id,
            category = %listing.category,
            "Listing submitted for review"
        );

        Ok(listing)
    }
}
