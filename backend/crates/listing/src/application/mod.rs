//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! One use case per externally meaningful operation.

pub mod admin_listings;
pub mod browse_listings;
pub mod config;
pub mod review_listing;
pub mod submit_listing;

use platform::rate_limit::{RateLimitConfig, RateLimitStore};

use crate::error::{ListingError, ListingResult};

/// Run one admission check; a denial becomes `RateLimited`
pub(crate) async fn admit<L>(limiter: &L, key: &str, config: &RateLimitConfig) -> ListingResult<()>
where
    L: RateLimitStore,
{
    let result = limiter
        .check_and_increment(key, config)
        .await
        .map_err(|e| ListingError::Internal(format!("rate limiter failed: {e}")))?;

    if result.allowed {
        Ok(())
    } else {
        tracing::debug!(key, reset_at_ms = result.reset_at_ms, "Admission denied");
        Err(ListingError::RateLimited)
    }
}
