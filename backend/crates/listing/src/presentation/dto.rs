//! API DTOs (Data Transfer Objects)

use crate::domain::entities::Listing;
use crate::domain::value_objects::{ListingFilters, ListingStatus};
use chrono::{DateTime, Utc};
use kernel::id::ListingId;
use serde::{Deserialize, Serialize};

/// A listing as returned by every endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
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

impl From<Listing> for ListingResponse {
    fn from(l: Listing) -> Self {
        Self {
            id: l.id,
            title: l.title,
            description: l.description,
            price: l.price,
            condition: l.condition,
            location: l.location,
            category: l.category,
            brand: l.brand,
            model: l.model,
            year: l.year,
            image_url: l.image_url,
            status: l.status,
            created_at: l.created_at,
        }
    }
}

/// Response for POST /api/listings and PATCH /api/listings/{id}/status
#[derive(Debug, Clone, Serialize)]
pub struct ListingEnvelope {
    pub listing: ListingResponse,
}

/// Response for GET /api/listings
#[derive(Debug, Clone, Serialize)]
pub struct ListingsEnvelope {
    pub listings: Vec<ListingResponse>,
}

impl From<Vec<Listing>> for ListingsEnvelope {
    fn from(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into_iter().map(Into::into).collect(),
        }
    }
}

/// Query for GET /api/listings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub include_all: Option<String>,
}

impl ListQuery {
    /// Only the literal `true` switches to the admin view
    pub fn include_all(&self) -> bool {
        self.include_all.as_deref() == Some("true")
    }

    pub fn into_filters(self) -> ListingFilters {
        ListingFilters {
            category: self.category,
            location: self.location,
            brand: self.brand,
            model: self.model,
            year: self.year,
        }
    }
}

/// Request for PATCH /api/listings/{id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Response for GET /api/health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub env: String,
}
