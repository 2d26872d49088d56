//! Insight Source Port - swappable insight generation capability.
//!
//! The template implementation is the only conforming source today; a real
//! generative backend would be a second implementation behind this same
//! trait, never a type check on which one is active.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::insight::{AnalysisType, InsightFingerprint, InsightPayload, PartnerSummary};
use crate::domain::partner::PartnerRecord;
use crate::domain::quiz::Archetype;

/// The input snapshot for one generation.
///
/// The cache fingerprint is computed from this exact snapshot, once; the
/// same value must key both the pre-generation lookup and the post-
/// generation write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRequest {
    pub archetype: Archetype,
    pub traits: Vec<String>,
    pub lifestyle_tags: Vec<String>,
    pub partners: Vec<PartnerSummary>,
    pub analysis_type: AnalysisType,
}

impl InsightRequest {
    /// Creates a request for an archetype and analysis type.
    pub fn new(archetype: Archetype, analysis_type: AnalysisType) -> Self {
        Self {
            archetype,
            traits: Vec::new(),
            lifestyle_tags: Vec::new(),
            partners: Vec::new(),
            analysis_type,
        }
    }

    /// Adds user traits.
    pub fn with_traits(mut self, traits: impl IntoIterator<Item = String>) -> Self {
        self.traits.extend(traits);
        self
    }

    /// Adds lifestyle tags.
    pub fn with_lifestyle_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.lifestyle_tags.extend(tags);
        self
    }

    /// Adds partner summaries from a history snapshot.
    pub fn with_history(mut self, history: &[PartnerRecord]) -> Self {
        self.partners
            .extend(history.iter().map(PartnerSummary::from));
        self
    }

    /// Computes the cache fingerprint of this snapshot.
    pub fn fingerprint(&self) -> InsightFingerprint {
        InsightFingerprint::compute(
            &self.partners,
            self.archetype,
            &self.traits,
            &self.lifestyle_tags,
            self.analysis_type,
        )
    }
}

/// Errors from an insight source.
#[derive(Debug, Clone, Error)]
pub enum InsightSourceError {
    /// The source cannot be reached or is overloaded.
    #[error("Insight source unavailable: {message}")]
    Unavailable { message: String },

    /// The source ran but could not produce a payload.
    #[error("Insight generation failed: {message}")]
    Generation { message: String },
}

/// Port for insight generation.
#[async_trait]
pub trait InsightSource: Send + Sync {
    /// Generates a payload for the request.
    ///
    /// Implementations must return a payload that passes
    /// [`InsightPayload::validate`]; callers re-validate before caching and
    /// substitute a fallback template on failure.
    async fn generate(&self, request: &InsightRequest)
        -> Result<InsightPayload, InsightSourceError>;

    /// A short name for logs.
    fn source_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fingerprint_matches_direct_computation() {
        let request = InsightRequest::new(Archetype::Chocolate, AnalysisType::Personality)
            .with_traits(vec!["curious".to_string()])
            .with_lifestyle_tags(vec!["night_owl".to_string()]);

        let direct = InsightFingerprint::compute(
            &request.partners,
            request.archetype,
            &request.traits,
            &request.lifestyle_tags,
            request.analysis_type,
        );
        assert_eq!(request.fingerprint(), direct);
    }

    #[test]
    fn request_fingerprint_is_stable_across_calls() {
        let request = InsightRequest::new(Archetype::Mint, AnalysisType::Growth);
        assert_eq!(request.fingerprint(), request.fingerprint());
    }
}
