//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Listing, NewListing)
//! - Domain value objects (ListingStatus, ReviewDecision, ListingFilters)
//! - Domain services (submission validation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
