//! HTTP Handlers

use crate::application::admin_listings::AdminListingsUseCase;
use crate::application::browse_listings::BrowseListingsUseCase;
use crate::application::config::ListingConfig;
use crate::application::review_listing::{ReviewListingInput, ReviewListingUseCase};
use crate::application::submit_listing::SubmitListingUseCase;
use crate::domain::repository::ListingRepository;
use crate::domain::services::ListingDraft;
use crate::error::{ListingError, ListingResult};
use crate::presentation::dto::{
    HealthResponse, ListQuery, ListingEnvelope, ListingsEnvelope, ReviewRequest,
};
use crate::presentation::extract::{AdminKey, ClientKey};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use platform::rate_limit::RateLimitStore;
use std::sync::Arc;

/// Shared state for listing handlers
pub struct ListingAppState<R, L>
where
    R: ListingRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub limiter: Arc<L>,
    pub config: Arc<ListingConfig>,
}

impl<R, L> Clone for ListingAppState<R, L>
where
    R: ListingRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            limiter: self.limiter.clone(),
            config: self.config.clone(),
        }
    }
}

/// GET /api/health
pub async fn health<R, L>(State(state): State<ListingAppState<R, L>>) -> Json<HealthResponse>
where
    R: ListingRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    Json(HealthResponse {
        ok: true,
        env: state.config.environment.clone(),
    })
}

/// GET /api/listings
///
/// Public browse, or the full moderation queue with `includeAll=true`.
pub async fn list_listings<R, L>(
    State(state): State<ListingAppState<R, L>>,
    admin_key: AdminKey,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ListingResult<Json<ListingsEnvelope>>
where
    R: ListingRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|e| ListingError::Validation(e.body_text()))?;

    let listings = if query.include_all() {
        AdminListingsUseCase::new(state.repo.clone(), state.config.clone())
            .execute(admin_key.as_deref())
            .await?
    } else {
        BrowseListingsUseCase::new(state.repo.clone())
            .execute(&query.into_filters())
            .await
    };

    Ok(Json(listings.into()))
}

/// POST /api/listings
pub async fn submit_listing<R, L>(
    State(state): State<ListingAppState<R, L>>,
    ClientKey(client): ClientKey,
    body: Result<Json<ListingDraft>, JsonRejection>,
) -> ListingResult<(StatusCode, Json<ListingEnvelope>)>
where
    R: ListingRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let Json(draft) = body.map_err(|e| ListingError::Validation(e.body_text()))?;

    let use_case = SubmitListingUseCase::new(
        state.repo.clone(),
        state.limiter.clone(),
        state.config.clone(),
    );
    let listing = use_case.execute(&client, draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(ListingEnvelope {
            listing: listing.into(),
        }),
    ))
}

/// PATCH /api/listings/{id}/status
pub async fn review_listing<R, L>(
    State(state): State<ListingAppState<R, L>>,
    Path(id): Path<String>,
    admin_key: AdminKey,
    ClientKey(client): ClientKey,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> ListingResult<Json<ListingEnvelope>>
where
    R: ListingRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    // An unreadable body is reported after the admin check, as a bad status
    let status = match body {
        Ok(Json(req)) => req.status,
        Err(e) => {
            tracing::debug!(error = %e.body_text(), "Unreadable review body");
            None
        }
    };

    let use_case = ReviewListingUseCase::new(
        state.repo.clone(),
        state.limiter.clone(),
        state.config.clone(),
    );
    let listing = use_case
        .execute(ReviewListingInput {
            admin_key: admin_key.as_deref(),
            client_key: &client,
            listing_id: &id,
            status: status.as_deref(),
        })
        .await?;

    Ok(Json(ListingEnvelope {
        listing: listing.into(),
    }))
}
