//! Admin Listings Use Case

use crate::application::config::ListingConfig;
use crate::domain::entities::Listing;
use crate::domain::repository::ListingRepository;
use crate::error::{ListingError, ListingResult};
use platform::admin::verify_admin_key;
use std::sync::Arc;

/// Admin Listings Use Case
///
/// Every listing regardless of status, for the moderation queue.
pub struct AdminListingsUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
    config: Arc<ListingConfig>,
}

impl<R> AdminListingsUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ListingConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, admin_key: Option<&str>) -> ListingResult<Vec<Listing>> {
        if !verify_admin_key(admin_key, self.config.admin_key()).is_granted() {
            return Err(ListingError::Unauthorized);
        }

        match self.repo.find_all().await {
            Ok(listings) => Ok(listings),
            Err(e) => {
                tracing::warn!(error = %e, "Admin listing read failed, returning empty result");
                Ok(Vec::new())
            }
        }
    }
}
