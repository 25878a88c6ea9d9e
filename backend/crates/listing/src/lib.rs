//! Marketplace Listing Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, validation, repository traits
//! - `application/` - Use cases (browse, admin list, submit, review)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Moderation Model
//! - Every submission starts `pending`; only `approved` listings are public
//! - Reviews require the shared admin key and are limited per (client, listing)
//! - Submissions are limited per client
//! - Public reads degrade to an empty list; writes surface storage failures

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ListingConfig;
pub use error::{ListingError, ListingResult};
pub use infra::postgres::PgListingRepository;
pub use presentation::router::{listing_router, listing_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
