//! Listing Router

use crate::application::config::ListingConfig;
use crate::domain::repository::ListingRepository;
use crate::infra::postgres::PgListingRepository;
use crate::presentation::handlers::{self, ListingAppState};
use axum::{
    Router,
    routing::{get, patch},
};
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore};
use std::sync::Arc;

/// Create the listing router with PostgreSQL repository
///
/// The limiter is passed in so its state outlives any single router build.
pub fn listing_router(
    repo: PgListingRepository,
    limiter: Arc<InMemoryRateLimitStore>,
    config: ListingConfig,
) -> Router {
    listing_router_generic(Arc::new(repo), limiter, config)
}

/// Create a generic listing router for any repository and limiter
pub fn listing_router_generic<R, L>(repo: Arc<R>, limiter: Arc<L>, config: ListingConfig) -> Router
where
    R: ListingRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let state = ListingAppState {
        repo,
        limiter,
        config: Arc::new(config),
    };

    Router::new()
        .route("/health", get(handlers::health::<R, L>))
        .route(
            "/listings",
            get(handlers::list_listings::<R, L>).post(handlers::submit_listing::<R, L>),
        )
        .route(
            "/listings/{id}/status",
            patch(handlers::review_listing::<R, L>),
        )
        .with_state(state)
}
