//! Insight Cache Port - content-addressed, TTL-bounded memoization.
//!
//! The cache is a performance optimization, never a correctness dependency:
//! callers must be able to regenerate and serve a fresh payload whenever the
//! backing store is unavailable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Timestamp;
use crate::domain::insight::{InsightFingerprint, InsightPayload};

/// A stored cache entry: fingerprint, payload, and validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub fingerprint: InsightFingerprint,
    pub payload: InsightPayload,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl CacheEntry {
    /// Creates an entry valid for `ttl_hours` from `now`.
    ///
    /// Negative TTLs produce an already-expired entry; the store keeps it
    /// but `get` will treat it as a miss.
    pub fn new(
        fingerprint: InsightFingerprint,
        payload: InsightPayload,
        ttl_hours: i64,
        now: Timestamp,
    ) -> Self {
        Self {
            fingerprint,
            payload,
            created_at: now,
            expires_at: now.plus_hours(ttl_hours),
        }
    }

    /// An entry is live iff the current time is strictly before expiry.
    pub fn is_live(&self, now: Timestamp) -> bool {
        now.is_before(&self.expires_at)
    }
}

/// Errors from the cache store.
#[derive(Debug, Clone, Error)]
pub enum CacheStoreError {
    /// The backing store cannot be reached. Recoverable: callers degrade to
    /// regenerate-and-serve, never failing the user-visible request.
    #[error("Cache store unavailable: {message}")]
    Unavailable { message: String },

    /// A stored row could not be decoded into a payload.
    #[error("Failed to decode cached payload: {message}")]
    Corrupt { message: String },
}

impl CacheStoreError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        CacheStoreError::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a corrupt-entry error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        CacheStoreError::Corrupt {
            message: message.into(),
        }
    }
}

/// Port for the content-addressed insight cache.
///
/// Implementations must guarantee at most one stored entry per fingerprint:
/// `put` is an upsert that fully replaces any existing entry, expired or
/// not. Concurrent writers for the same fingerprint collapse to a single
/// stored result, last writer wins.
#[async_trait]
pub trait InsightCache: Send + Sync {
    /// Returns the live entry for a fingerprint.
    ///
    /// Expired entries are never returned, even if physically still stored;
    /// they read as `None` and are eligible for overwrite.
    async fn get(
        &self,
        fingerprint: &InsightFingerprint,
    ) -> Result<Option<CacheEntry>, CacheStoreError>;

    /// Upserts an entry with `expires_at = now + ttl_hours`.
    async fn put(
        &self,
        fingerprint: &InsightFingerprint,
        payload: InsightPayload,
        ttl_hours: i64,
    ) -> Result<CacheEntry, CacheStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insight::{GrowthInsight, Narrative};
    use crate::domain::foundation::Score;

    fn payload() -> InsightPayload {
        InsightPayload::Growth(GrowthInsight {
            narrative: Narrative {
                summary: "s".to_string(),
                strengths: vec!["a".to_string()],
                growth_areas: vec!["b".to_string()],
                recommendations: vec!["c".to_string()],
                confidence: Score::new(0.5),
            },
        })
    }

    #[test]
    fn entry_is_live_before_expiry() {
        let now = Timestamp::from_unix_secs(1_000_000);
        let entry = CacheEntry::new(InsightFingerprint::from_hex("ab"), payload(), 24, now);

        assert!(entry.is_live(now));
        assert!(entry.is_live(now.plus_hours(23)));
        assert!(!entry.is_live(now.plus_hours(24)));
        assert!(!entry.is_live(now.plus_hours(25)));
    }

    #[test]
    fn negative_ttl_creates_expired_entry() {
        let now = Timestamp::from_unix_secs(1_000_000);
        let entry = CacheEntry::new(InsightFingerprint::from_hex("ab"), payload(), -1, now);

        assert!(!entry.is_live(now));
        assert!(entry.expires_at.is_before(&entry.created_at));
    }
}
