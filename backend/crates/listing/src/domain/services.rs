//! Domain Services
//!
//! Shape checks for submissions and reviews. Everything here is pure: no
//! store, no limiter, no clock.

use serde::Deserialize;

use super::entities::NewListing;
use super::value_objects::{NumericInput, ReviewDecision};
use crate::error::{ListingError, ListingResult};

/// Raw submission as received from a client
///
/// Every field is optional at this stage so that missing required fields
/// are reported as validation messages rather than decode failures.
/// Fields not listed here (including `status`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<NumericInput>,
    pub condition: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<NumericInput>,
    pub image_url: Option<String>,
}

/// Validate a draft into a [`NewListing`]
///
/// All problems are collected and reported together, joined with ", ".
pub fn validate_draft(draft: ListingDraft) -> ListingResult<NewListing> {
    let mut errors: Vec<String> = Vec::new();

    let title = required("title", draft.title, &mut errors);
    let location = required("location", draft.location, &mut errors);
    let category = required("category", draft.category, &mut errors);
    let brand = required("brand", draft.brand, &mut errors);
    let model = required("model", draft.model, &mut errors);

    let price = match draft.price.as_ref().map(NumericInput::resolve) {
        None | Some(Ok(None)) => None,
        Some(Ok(Some(p))) if p >= 0.0 => Some(p),
        Some(Ok(Some(_))) => {
            errors.push("price must be zero or greater".to_string());
            None
        }
        Some(Err(_)) => {
            errors.push("price must be a number".to_string());
            None
        }
    };

    let year = match draft.year.as_ref().map(NumericInput::resolve) {
        None | Some(Ok(None)) => None,
        Some(Ok(Some(y))) => {
            let rounded = y.round();
            if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
                errors.push("year is out of range".to_string());
                None
            } else {
                Some(rounded as i32)
            }
        }
        Some(Err(_)) => {
            errors.push("year must be a number".to_string());
            None
        }
    };

    let image_url = match optional(draft.image_url) {
        Some(raw) => match url::Url::parse(&raw) {
            Ok(_) => Some(raw),
            Err(_) => {
                errors.push("imageUrl must be a valid URL".to_string());
                None
            }
        },
        None => None,
    };

    if !errors.is_empty() {
        return Err(ListingError::Validation(errors.join(", ")));
    }

    Ok(NewListing {
        title,
        description: optional(draft.description),
        price,
        condition: optional(draft.condition),
        location,
        category,
        brand,
        model,
        year,
        image_url,
    })
}

/// Parse the review target status
pub fn parse_decision(raw: Option<&str>) -> ListingResult<ReviewDecision> {
    raw.and_then(ReviewDecision::from_code).ok_or_else(|| {
        ListingError::Validation("status must be one of: approved, rejected".to_string())
    })
}

fn required(field: &str, value: Option<String>, errors: &mut Vec<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => {
            errors.push(format!("{field} is required"));
            String::new()
        }
    }
}

// Blank optional text is stored as absent
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
