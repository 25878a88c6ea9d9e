//! Admin Key Guard
//!
//! Privileged routes are protected by one process-wide shared secret that the
//! caller presents in the `x-admin-key` header. There are no sessions or
//! per-user roles.

use axum::http::HeaderMap;

/// Header carrying the presented admin key
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Outcome of an admin key check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAccess {
    Granted,
    Denied,
}

impl AdminAccess {
    #[inline]
    pub fn is_granted(&self) -> bool {
        matches!(self, AdminAccess::Granted)
    }
}

/// Compare a presented key against the configured one.
///
/// Granted only when both sides are present, non-empty and exactly equal.
/// A deployment without a configured key denies everyone.
pub fn verify_admin_key(presented: Option<&str>, expected: Option<&str>) -> AdminAccess {
    match (presented, expected) {
        (Some(presented), Some(expected))
            if !presented.is_empty() && !expected.is_empty() && presented == expected =>
        {
            AdminAccess::Granted
        }
        _ => AdminAccess::Denied,
    }
}

/// Read the presented admin key from request headers
pub fn extract_admin_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_matching_keys_granted() {
        assert_eq!(
            verify_admin_key(Some("s3cret"), Some("s3cret")),
            AdminAccess::Granted
        );
    }

    #[test]
    fn test_mismatch_denied() {
        assert_eq!(
            verify_admin_key(Some("s3cret"), Some("other")),
            AdminAccess::Denied
        );
        // no prefix or case-insensitive matching
        assert_eq!(
            verify_admin_key(Some("s3c"), Some("s3cret")),
            AdminAccess::Denied
        );
        assert_eq!(
            verify_admin_key(Some("S3CRET"), Some("s3cret")),
            AdminAccess::Denied
        );
    }

    #[test]
    fn test_empty_or_missing_presented_denied() {
        assert_eq!(verify_admin_key(Some(""), Some("s3cret")), AdminAccess::Denied);
        assert_eq!(verify_admin_key(None, Some("s3cret")), AdminAccess::Denied);
    }

    #[test]
    fn test_unconfigured_secret_denies_everyone() {
        assert_eq!(verify_admin_key(Some("s3cret"), None), AdminAccess::Denied);
        assert_eq!(verify_admin_key(Some("s3cret"), Some("")), AdminAccess::Denied);
        assert_eq!(verify_admin_key(Some(""), Some("")), AdminAccess::Denied);
        assert_eq!(verify_admin_key(None, None), AdminAccess::Denied);
    }

    #[test]
    fn test_extract_admin_key() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_admin_key(&headers), None);

        headers.insert(ADMIN_KEY_HEADER, HeaderValue::from_static("s3cret"));
        assert_eq!(extract_admin_key(&headers), Some("s3cret".to_string()));
    }
}
