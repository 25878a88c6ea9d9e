//! Domain Value Objects
//!
//! Immutable value types for the listing domain.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ListingStatus - moderation state
// ============================================================================

/// Moderation status of a listing
///
/// Every listing starts `Pending`. A review moves it to `Approved` or
/// `Rejected`; a later review may move it again (re-review is allowed), but
/// nothing ever moves it back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ListingStatus {
    /// String code used in the database and on the wire
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Publicly browsable
    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Approved)
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// ReviewDecision - the only legal transition targets
// ============================================================================

/// Outcome of an admin review
///
/// Excludes `Pending`: no review moves a listing back to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl ReviewDecision {
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.status().code()
    }

    /// Status the listing ends up in
    #[inline]
    pub const fn status(&self) -> ListingStatus {
        match self {
            Self::Approved => ListingStatus::Approved,
            Self::Rejected => ListingStatus::Rejected,
        }
    }
}

impl From<ReviewDecision> for ListingStatus {
    fn from(decision: ReviewDecision) -> Self {
        decision.status()
    }
}

// ============================================================================
// ListingFilters - public browse constraints
// ============================================================================

/// Optional constraints for the public listing browse
///
/// Text fields match as case-insensitive substrings; `year` matches the
/// decimal text of the stored year exactly. Blank values mean "no constraint".
/// All present constraints must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub category: Option<String>,
    pub location: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
}

impl ListingFilters {
    pub fn category(&self) -> Option<&str> {
        constraint(&self.category)
    }

    pub fn location(&self) -> Option<&str> {
        constraint(&self.location)
    }

    pub fn brand(&self) -> Option<&str> {
        constraint(&self.brand)
    }

    pub fn model(&self) -> Option<&str> {
        constraint(&self.model)
    }

    pub fn year(&self) -> Option<&str> {
        constraint(&self.year)
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        self.category().is_none()
            && self.location().is_none()
            && self.brand().is_none()
            && self.model().is_none()
            && self.year().is_none()
    }
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

// ============================================================================
// NumericInput - loosely typed number from a form
// ============================================================================

/// Text that does not parse as a finite number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotANumber;

/// A number as submitted by a browser form: either a JSON number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// `Ok(None)` for blank text
    pub fn resolve(&self) -> Result<Option<f64>, NotANumber> {
        match self {
            NumericInput::Number(n) if n.is_finite() => Ok(Some(*n)),
            NumericInput::Number(_) => Err(NotANumber),
            NumericInput::Text(t) if t.trim().is_empty() => Ok(None),
            NumericInput::Text(t) => match t.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Some(n)),
                _ => Err(NotANumber),
            },
        }
    }
}
