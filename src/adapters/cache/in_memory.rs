//! In-memory insight cache for testing and single-process deployments.
//!
//! Backed by a HashMap keyed on the content fingerprint. Expired entries are
//! evicted lazily on lookup. Not suitable for multi-server deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::domain::insight::{InsightFingerprint, InsightPayload};
use crate::ports::{CacheEntry, CacheStoreError, InsightCache};

/// In-memory insight cache keyed by fingerprint.
#[derive(Debug, Default)]
pub struct InMemoryInsightCache {
    entries: Arc<RwLock<HashMap<InsightFingerprint, CacheEntry>>>,
    /// When set, every operation fails as if the store were down.
    unavailable: AtomicBool,
}

impl InMemoryInsightCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles simulated outage for degradation tests.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of entries currently held, including expired ones not yet
    /// evicted. Test hook.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Removes all entries. Test hook.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    fn check_available(&self) -> Result<(), CacheStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CacheStoreError::unavailable("simulated cache outage"));
        }
        Ok(())
    }
}

#[async_trait]
impl InsightCache for InMemoryInsightCache {
    async fn get(
        &self,
        fingerprint: &InsightFingerprint,
    ) -> Result<Option<CacheEntry>, CacheStoreError> {
        self.check_available()?;
        let now = Timestamp::now();

        let mut entries = self.entries.write().await;
        match entries.get(fingerprint) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.clone())),
            Some(_) => {
                // Expired entries read as misses and are evicted here.
                entries.remove(fingerprint);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        fingerprint: &InsightFingerprint,
        payload: InsightPayload,
        ttl_hours: i64,
    ) -> Result<CacheEntry, CacheStoreError> {
        self.check_available()?;
        let entry = CacheEntry::new(fingerprint.clone(), payload, ttl_hours, Timestamp::now());

        let mut entries = self.entries.write().await;
        entries.insert(fingerprint.clone(), entry.clone());
        Ok(entry)
    }
}
