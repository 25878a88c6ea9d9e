//! Application Configuration
//!
//! Configuration for the listing application layer.

use platform::rate_limit::RateLimitConfig;

/// Listing application configuration
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Shared admin secret; `None` denies every privileged request
    pub admin_key: Option<String>,
    /// Limit for submissions, keyed by client
    pub submit_limit: RateLimitConfig,
    /// Limit for reviews, keyed by client and listing
    pub review_limit: RateLimitConfig,
    /// Deployment environment reported by the health check
    pub environment: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            admin_key: None,
            submit_limit: RateLimitConfig::default(),
            review_limit: RateLimitConfig::default(),
            environment: "development".to_string(),
        }
    }
}

impl ListingConfig {
    /// Build from raw environment values
    ///
    /// An empty admin key is the same as no admin key.
    pub fn new(admin_key: Option<String>, environment: Option<String>) -> Self {
        Self {
            admin_key: admin_key.filter(|k| !k.is_empty()),
            environment: environment
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "development".to_string()),
            ..Default::default()
        }
    }

    pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.admin_key = (!key.is_empty()).then_some(key);
        self
    }

    pub fn admin_key(&self) -> Option<&str> {
        self.admin_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_admin_key_is_none() {
        let config = ListingConfig::new(Some(String::new()), None);
        assert_eq!(config.admin_key(), None);
        assert_eq!(config.environment, "development");

        let config = ListingConfig::new(Some("s3cret".into()), Some("production".into()));
        assert_eq!(config.admin_key(), Some("s3cret"));
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_default_limits_are_one_per_two_seconds() {
        let config = ListingConfig::default();
        assert_eq!(config.submit_limit.max_requests, 1);
        assert_eq!(config.submit_limit.window_ms(), 2000);
        assert_eq!(config.review_limit.window_ms(), 2000);
    }
}
