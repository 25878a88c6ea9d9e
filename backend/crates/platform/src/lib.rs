//! Platform Crate - Technical Infrastructure
//!
//! Building blocks that know nothing about listings:
//! - Admin key check (single shared secret)
//! - Fixed-window request limiting
//! - Client identification from HTTP headers

pub mod admin;
pub mod client;
pub mod rate_limit;
