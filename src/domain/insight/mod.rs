//! Insight module - payloads, narrative templates, and cache fingerprints.

mod fingerprint;
mod payload;
mod templates;

pub use fingerprint::{InsightFingerprint, PartnerSummary};
pub use payload::{
    AnalysisType, AttachmentStyle, CompatibilityInsight, EmotionalProfile, GrowthInsight,
    InsightPayload, Narrative, PayloadError, PersonalityInsight,
};
pub use templates::{flavour_template, FlavourTemplate, TemplateCatalog};
