//! AnalyzeProfileHandler - the serve-an-insight pipeline.
//!
//! Fingerprint the input snapshot once, consult the cache, generate on a
//! miss, validate before caching, aggregate metrics. The cache is strictly
//! an optimization: any cache failure degrades to generate-and-serve, and
//! the degradation is visible in the result flags, not in an error.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::insight::{flavour_template, AnalysisType, InsightFingerprint, InsightPayload};
use crate::domain::metrics::{aggregate, CompositeMetrics};
use crate::domain::quiz::Archetype;
use crate::ports::{CacheEntry, CacheStoreError, InsightCache, InsightRequest, InsightSource, PartnerStore};

/// Command to analyze a user's profile.
#[derive(Debug, Clone)]
pub struct AnalyzeProfileCommand {
    pub user_id: UserId,
    pub archetype: Archetype,
    pub traits: Vec<String>,
    pub lifestyle_tags: Vec<String>,
    pub analysis_type: AnalysisType,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeProfileResult {
    pub payload: InsightPayload,
    pub metrics: CompositeMetrics,
    /// True when the payload came from the cache.
    pub cache_hit: bool,
    /// True when a cache or source failure forced a fallback path.
    pub degraded: bool,
}

/// Handler for profile analysis.
pub struct AnalyzeProfileHandler {
    partner_store: Arc<dyn PartnerStore>,
    cache: Arc<dyn InsightCache>,
    source: Arc<dyn InsightSource>,
    cache_ttl_hours: i64,
    cache_enabled: bool,
}

impl AnalyzeProfileHandler {
    pub fn new(
        partner_store: Arc<dyn PartnerStore>,
        cache: Arc<dyn InsightCache>,
        source: Arc<dyn InsightSource>,
        cache_ttl_hours: i64,
    ) -> Self {
        Self {
            partner_store,
            cache,
            source,
            cache_ttl_hours,
            cache_enabled: true,
        }
    }

    /// Controls cache participation (config `cache.enabled`). With the
    /// cache disabled every request regenerates; skipping the cache is
    /// deliberate, not a degradation.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeProfileCommand,
    ) -> Result<AnalyzeProfileResult, DomainError> {
        let history = self.partner_store.list_for_user(&cmd.user_id).await?;

        let request = InsightRequest::new(cmd.archetype, cmd.analysis_type)
            .with_traits(cmd.traits)
            .with_lifestyle_tags(cmd.lifestyle_tags)
            .with_history(&history);

        // Computed once; the same value keys the lookup and the write so a
        // generated payload can never land under a different key.
        let fingerprint = request.fingerprint();
        let mut degraded = false;

        match self.cache_get(&fingerprint).await {
            Ok(Some(entry)) => {
                info!(fingerprint = %fingerprint, "insight cache hit");
                let metrics = aggregate(&history, &entry.payload)?;
                return Ok(AnalyzeProfileResult {
                    payload: entry.payload,
                    metrics,
                    cache_hit: true,
                    degraded: false,
                });
            }
            Ok(None) => {}
            Err(err) => {
                warn!(fingerprint = %fingerprint, error = %err, "cache read failed, regenerating");
                degraded = true;
            }
        }

        let (payload, cacheable) = self.generate(&request, &mut degraded).await;

        if cacheable && self.cache_enabled {
            // Write failures are swallowed: the payload is already in hand.
            if let Err(err) = self
                .cache
                .put(&fingerprint, payload.clone(), self.cache_ttl_hours)
                .await
            {
                warn!(fingerprint = %fingerprint, error = %err, "cache write failed");
                degraded = true;
            }
        }

        let metrics = aggregate(&history, &payload)?;
        Ok(AnalyzeProfileResult {
            payload,
            metrics,
            cache_hit: false,
            degraded,
        })
    }

    /// Looks up the fingerprint, or reports a clean miss when the cache is
    /// disabled by configuration.
    async fn cache_get(
        &self,
        fingerprint: &InsightFingerprint,
    ) -> Result<Option<CacheEntry>, CacheStoreError> {
        if !self.cache_enabled {
            return Ok(None);
        }
        self.cache.get(fingerprint).await
    }

    /// Produces a payload, falling back to the template catalog when the
    /// source fails or returns something malformed. Returns the payload and
    /// whether it may be cached; fallback payloads for malformed output are
    /// never cached, so a healthy source retries on the next request.
    async fn generate(
        &self,
        request: &InsightRequest,
        degraded: &mut bool,
    ) -> (InsightPayload, bool) {
        match self.source.generate(request).await {
            Ok(payload) => match payload.validate() {
                Ok(()) => (payload, true),
                Err(err) => {
                    warn!(
                        source = self.source.source_name(),
                        error = %err,
                        "source payload failed validation, serving template fallback"
                    );
                    *degraded = true;
                    (self.fallback(request), false)
                }
            },
            Err(err) => {
                warn!(
                    source = self.source.source_name(),
                    error = %err,
                    "insight source failed, serving template fallback"
                );
                *degraded = true;
                (self.fallback(request), false)
            }
        }
    }

    fn fallback(&self, request: &InsightRequest) -> InsightPayload {
        flavour_template(request.archetype).build_payload(request.archetype, request.analysis_type)
    }
}
