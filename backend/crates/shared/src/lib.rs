//! Shared Kernel
//!
//! Vocabulary every marketplace crate agrees on:
//! - the unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - typed entity identifiers ([`id::ListingId`])
//!
//! Anything listing-specific belongs in the `listing` crate, not here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
