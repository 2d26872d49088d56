//! Template-backed insight source.
//!
//! Deterministic generation from the static flavour template catalog. Same
//! request, same payload, every time. Archetypes without their own template
//! fall back to the default flavour's template.

use async_trait::async_trait;

use crate::domain::insight::{flavour_template, InsightPayload};
use crate::ports::{InsightRequest, InsightSource, InsightSourceError};

/// Insight source that renders payloads from the built-in template catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateInsightSource;

impl TemplateInsightSource {
    /// Creates the template source.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InsightSource for TemplateInsightSource {
    async fn generate(&self, request: &InsightRequest) -> Result<InsightPayload, InsightSourceError> {
        let template = flavour_template(request.archetype);
        Ok(template.build_payload(request.archetype, request.analysis_type))
    }

    fn source_name(&self) -> &'static str {
        "template"
    }
}
