//! Presentation Layer
//!
//! HTTP handlers and DTOs for the API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;
