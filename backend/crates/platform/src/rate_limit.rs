//! Rate Limiting Infrastructure
//!
//! Fixed-window admission control keyed by an arbitrary string. Time is cut
//! into windows that start at a key's first admitted request; each window
//! admits at most `max_requests` requests for that key.
//!
//! Window boundaries are imprecise by construction: a client can land one
//! admission at the very end of a window and the next at the very start of
//! the following one.
//!
//! State lives in process memory. Separate processes enforce separate,
//! independent ceilings.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::Duration;

/// Rate limit configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests admitted per window
    pub max_requests: u32,
    /// Window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    /// One admission per two seconds
    fn default() -> Self {
        Self {
            max_requests: 1,
            window: Duration::from_millis(2000),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn from_millis(max_requests: u32, window_ms: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_millis(window_ms),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

pub type RateLimitBackendError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and, when admitted, count a request for `key`
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitBackendError>;

    /// Forget everything about `key`; its next request is admitted
    async fn reset(&self, key: &str) -> Result<(), RateLimitBackendError>;
}

/// Per-key state for the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitRecord {
    window_start_ms: i64,
    count: u32,
}

impl HitRecord {
    fn fresh(now_ms: i64) -> Self {
        Self {
            window_start_ms: now_ms,
            count: 1,
        }
    }
}

/// Process-local fixed-window limiter
///
/// Records are created lazily on a key's first request and replaced when
/// they expire; nothing else removes them except [`InMemoryRateLimitStore::reset_key`].
/// Each check holds the key's shard lock for the whole read-modify-write, so
/// two concurrent requests can never both observe spare capacity.
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    records: DashMap<String, HitRecord>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admission decision for `key` at an explicit instant (epoch millis)
    pub fn check_at(&self, key: &str, config: &RateLimitConfig, now_ms: i64) -> RateLimitResult {
        let window_ms = config.window_ms();

        let record = match self.records.entry(key.to_owned()) {
            Entry::Vacant(slot) => {
                if config.max_requests == 0 {
                    return denied(now_ms, window_ms);
                }
                *slot.insert(HitRecord::fresh(now_ms))
            }
            Entry::Occupied(mut slot) => {
                let record = slot.get_mut();
                if now_ms - record.window_start_ms > window_ms {
                    *record = HitRecord::fresh(now_ms);
                } else if record.count < config.max_requests {
                    record.count += 1;
                } else {
                    tracing::debug!(key = %key, count = record.count, "Rate limit window exhausted");
                    return RateLimitResult {
                        allowed: false,
                        remaining: 0,
                        reset_at_ms: record.window_start_ms + window_ms,
                    };
                }
                *record
            }
        };

        RateLimitResult {
            allowed: true,
            remaining: config.max_requests.saturating_sub(record.count),
            reset_at_ms: record.window_start_ms + window_ms,
        }
    }

    /// Admission decision for `key` now
    pub fn try_admit(&self, key: &str, config: &RateLimitConfig) -> bool {
        self.check_at(key, config, Utc::now().timestamp_millis())
            .allowed
    }

    pub fn reset_key(&self, key: &str) {
        self.records.remove(key);
    }

    /// Number of keys currently tracked
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn denied(now_ms: i64, window_ms: i64) -> RateLimitResult {
    RateLimitResult {
        allowed: false,
        remaining: 0,
        reset_at_ms: now_ms + window_ms,
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitBackendError> {
        Ok(self.check_at(key, config, Utc::now().timestamp_millis()))
    }

    async fn reset(&self, key: &str) -> Result<(), RateLimitBackendError> {
        self.reset_key(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRateLimitStore, RateLimitConfig, RateLimitStore};
    use std::sync::Arc;

    const T0: i64 = 1_700_000_000_000;

    fn strict() -> RateLimitConfig {
        RateLimitConfig::default()
    }

    #[test]
    fn test_default_config_is_one_per_two_seconds() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_requests, 1);
        assert_eq!(config.window_ms(), 2000);
        assert_eq!(RateLimitConfig::new(10, 60).window_ms(), 60_000);
    }

    #[test]
    fn test_first_request_admitted() {
        let store = InMemoryRateLimitStore::new();
        let result = store.check_at("1.2.3.4", &strict(), T0);
        assert!(result.allowed);
        assert_eq!(result.remaining, 0);
        assert_eq!(result.reset_at_ms, T0 + 2000);
    }

    #[test]
    fn test_second_request_within_window_denied() {
        let store = InMemoryRateLimitStore::new();
        assert!(store.check_at("k", &strict(), T0).allowed);
        assert!(!store.check_at("k", &strict(), T0 + 1).allowed);
        assert!(!store.check_at("k", &strict(), T0 + 1999).allowed);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let store = InMemoryRateLimitStore::new();
        assert!(store.check_at("k", &strict(), T0).allowed);
        // exactly WINDOW later is still the same window
        assert!(!store.check_at("k", &strict(), T0 + 2000).allowed);
        assert!(store.check_at("k", &strict(), T0 + 2001).allowed);
    }

    #[test]
    fn test_expired_window_replaced_not_incremented() {
        let store = InMemoryRateLimitStore::new();
        assert!(store.check_at("k", &strict(), T0).allowed);
        assert!(store.check_at("k", &strict(), T0 + 2001).allowed);
        // new window starts at T0 + 2001
        assert!(!store.check_at("k", &strict(), T0 + 4000).allowed);
        assert!(store.check_at("k", &strict(), T0 + 4002).allowed);
    }

    #[test]
    fn test_denials_do_not_extend_window() {
        let store = InMemoryRateLimitStore::new();
        assert!(store.check_at("k", &strict(), T0).allowed);
        for offset in [100, 500, 1500, 2000] {
            assert!(!store.check_at("k", &strict(), T0 + offset).allowed);
        }
        assert!(store.check_at("k", &strict(), T0 + 2001).allowed);
    }

    #[test]
    fn test_keys_are_independent() {
        let store = InMemoryRateLimitStore::new();
        assert!(store.check_at("a", &strict(), T0).allowed);
        assert!(store.check_at("b", &strict(), T0).allowed);
        assert!(store.check_at("a-listing-1", &strict(), T0).allowed);
        assert!(!store.check_at("a", &strict(), T0 + 1).allowed);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_reset_restores_admission() {
        let store = InMemoryRateLimitStore::new();
        assert!(store.check_at("k", &strict(), T0).allowed);
        assert!(!store.check_at("k", &strict(), T0 + 10).allowed);

        store.reset_key("k");
        assert!(store.is_empty());
        assert!(store.check_at("k", &strict(), T0 + 11).allowed);

        // resetting an unknown key is a no-op
        store.reset_key("never-seen");
        assert!(store.check_at("never-seen", &strict(), T0).allowed);
    }

    #[test]
    fn test_larger_ceiling_counts_down() {
        let store = InMemoryRateLimitStore::new();
        let config = RateLimitConfig::from_millis(3, 1000);

        assert_eq!(store.check_at("k", &config, T0).remaining, 2);
        assert_eq!(store.check_at("k", &config, T0 + 1).remaining, 1);
        assert_eq!(store.check_at("k", &config, T0 + 2).remaining, 0);
        assert!(!store.check_at("k", &config, T0 + 3).allowed);
    }

    #[test]
    fn test_zero_ceiling_denies_everything() {
        let store = InMemoryRateLimitStore::new();
        let config = RateLimitConfig::from_millis(0, 1000);
        assert!(!store.check_at("k", &config, T0).allowed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_checks_admit_exactly_one() {
        let store = Arc::new(InMemoryRateLimitStore::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.check_at("shared", &strict(), T0).allowed)
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|allowed| *allowed)
            .count();
        assert_eq!(admitted, 1);
    }

    #[tokio::test]
    async fn test_trait_check_and_reset() {
        let store = InMemoryRateLimitStore::new();
        let config = strict();

        assert!(store.check_and_increment("k", &config).await.unwrap().allowed);
        assert!(!store.check_and_increment("k", &config).await.unwrap().allowed);

        store.reset("k").await.unwrap();
        assert!(store.check_and_increment("k", &config).await.unwrap().allowed);
    }
}
