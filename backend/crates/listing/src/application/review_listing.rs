//! Review Listing Use Case

use crate::application::admit;
use crate::application::config::ListingConfig;
use crate::domain::entities::Listing;
use crate::domain::repository::ListingRepository;
use crate::domain::services::parse_decision;
use crate::error::{ListingError, ListingResult};
use kernel::id::ListingId;
use platform::admin::verify_admin_key;
use platform::client::scoped_key;
use platform::rate_limit::RateLimitStore;
use std::sync::Arc;

/// Input DTO for review listing
#[derive(Debug, Clone)]
pub struct ReviewListingInput<'a> {
    pub admin_key: Option<&'a str>,
    pub client_key: &'a str,
    pub listing_id: &'a str,
    pub status: Option<&'a str>,
}

/// Review Listing Use Case
///
/// Order: admin key, decision, limiter on (client, listing), id, update.
pub struct ReviewListingUseCase<R, L>
where
    R: ListingRepository,
    L: RateLimitStore,
{
    repo: Arc<R>,
    limiter: Arc<L>,
    config: Arc<ListingConfig>,
}

impl<R, L> ReviewListingUseCase<R, L>
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

    pub async fn execute(&self, input: ReviewListingInput<'_>) -> ListingResult<Listing> {
        if !verify_admin_key(input.admin_key, self.config.admin_key()).is_granted() {
            return Err(ListingError::Unauthorized);
        }

        let decision = parse_decision(input.status)?;

        // Every spelling of one id shares a limiter key
        let parsed = input.listing_id.parse::<ListingId>();
        let entity = match &parsed {
            Ok(id) => id.to_string(),
            Err(_) => input.listing_id.to_string(),
        };
        let key = scoped_key(input.client_key, &entity);
        admit(self.limiter.as_ref(), &key, &self.config.review_limit).await?;

        // A malformed id cannot name an existing row
        let id = parsed.map_err(|_| ListingError::NotFound)?;

        let listing = self
            .repo
            .update_status(id, decision)
            .await?
            .ok_or(ListingError::NotFound)?;

        tracing::info!(
            listing_id = %listing.id,
            status = %listing.status,
            "Listing reviewed"
        );

        Ok(listing)
    }
}
