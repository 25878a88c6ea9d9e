//! Domain Entities
//!
//! Core business entities for the listing domain.

use chrono::{DateTime, Utc};
use kernel::id::ListingId;

use super::value_objects::ListingStatus;

/// Listing entity - a marketplace item offered for sale
///
/// `id` and `created_at` are assigned once at creation and never change.
/// `status` changes only through a moderation review.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub condition: Option<String>,
    pub location: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub image_url: Option<String>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Materialize a validated submission as a fresh pending listing
    pub fn create(new: NewListing) -> Self {
        Self {
            id: ListingId::new(),
            title: new.title,
            description: new.description,
            price: new.price,
            condition: new.condition,
            location: new.location,
            category: new.category,
            brand: new.brand,
            model: new.model,
            year: new.year,
            image_url: new.image_url,
            status: ListingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Visible on the public browse
    #[inline]
    pub fn is_public(&self) -> bool {
        self.status.is_public()
    }
}

/// A validated submission, not yet persisted
///
/// No status field: new listings are always pending.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub condition: Option<String>,
    pub location: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewListing {
        NewListing {
            title: "Stratocaster".into(),
            description: None,
            price: Some(650.0),
            condition: Some("used".into()),
            location: "Austin".into(),
            category: "guitars".into(),
            brand: "Fender".into(),
            model: "Player".into(),
            year: Some(2020),
            image_url: None,
        }
    }

    #[test]
    fn test_create_starts_pending() {
        let listing = Listing::create(sample());
        assert_eq!(listing.status, ListingStatus::Pending);
        assert!(!listing.is_public());
        assert_eq!(listing.title, "Stratocaster");
        assert_eq!(listing.year, Some(2020));
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let a = Listing::create(sample());
        let b = Listing::create(sample());
        assert_ne!(a.id, b.id);
    }
}
