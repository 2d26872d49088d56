//! Insight payloads - tagged per analysis type, validated on construction.
//!
//! Each analysis type carries its own fixed schema. Payloads are validated
//! before they reach the cache or the aggregator; a payload that fails
//! validation is never cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::Score;

/// Which kind of analysis an insight was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Personality,
    Compatibility,
    Growth,
}

impl AnalysisType {
    /// Returns the string representation for storage and fingerprinting.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Personality => "personality",
            AnalysisType::Compatibility => "compatibility",
            AnalysisType::Growth => "growth",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attachment style reported in an emotional profile.
///
/// Upstream sources may report styles this taxonomy does not know; those are
/// preserved as `Unknown` and score the neutral 0.5 rather than failing the
/// whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Fearful,
    Unknown(String),
}

impl AttachmentStyle {
    /// Emotional-closeness score for this style.
    ///
    /// Unknown styles map to the documented neutral default of 0.5, not 0.
    pub fn closeness(&self) -> Score {
        match self {
            AttachmentStyle::Secure => Score::new(0.9),
            AttachmentStyle::Anxious => Score::new(0.4),
            AttachmentStyle::Avoidant => Score::new(0.3),
            AttachmentStyle::Fearful => Score::new(0.2),
            AttachmentStyle::Unknown(_) => Score::NEUTRAL,
        }
    }

    /// Returns the style name.
    pub fn as_str(&self) -> &str {
        match self {
            AttachmentStyle::Secure => "secure",
            AttachmentStyle::Anxious => "anxious",
            AttachmentStyle::Avoidant => "avoidant",
            AttachmentStyle::Fearful => "fearful",
            AttachmentStyle::Unknown(s) => s,
        }
    }
}

impl From<String> for AttachmentStyle {
    fn from(s: String) -> Self {
        match s.as_str() {
            "secure" => AttachmentStyle::Secure,
            "anxious" => AttachmentStyle::Anxious,
            "avoidant" => AttachmentStyle::Avoidant,
            "fearful" => AttachmentStyle::Fearful,
            _ => AttachmentStyle::Unknown(s),
        }
    }
}

impl From<AttachmentStyle> for String {
    fn from(style: AttachmentStyle) -> Self {
        style.as_str().to_string()
    }
}

/// Emotional profile section of a payload.
///
/// Maturity and availability are raw upstream numbers; the aggregator clamps
/// them to [0,1] on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalProfile {
    pub attachment_style: AttachmentStyle,
    pub emotional_maturity: f64,
    pub emotional_availability: f64,
}

/// Narrative fields shared by every analysis type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub summary: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub recommendations: Vec<String>,
    /// Confidence in [0,1]; clamped at construction via `Score`.
    pub confidence: Score,
}

/// Personality analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityInsight {
    pub narrative: Narrative,
    pub emotional_profile: EmotionalProfile,
}

/// Compatibility analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityInsight {
    pub narrative: Narrative,
    pub emotional_profile: EmotionalProfile,
    /// Average compatibility across partner summaries, when computed.
    pub average_compatibility: Option<f64>,
}

/// Growth analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInsight {
    pub narrative: Narrative,
}

/// A generated insight, tagged by the analysis type that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "analysis_type", rename_all = "snake_case")]
pub enum InsightPayload {
    Personality(PersonalityInsight),
    Compatibility(CompatibilityInsight),
    Growth(GrowthInsight),
}

/// Schema validation failures for generated payloads.
#[derive(Debug, Clone, Error)]
pub enum PayloadError {
    #[error("Payload section '{section}' is empty")]
    EmptySection { section: &'static str },

    #[error("Payload field '{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl InsightPayload {
    /// Returns the analysis type of this payload.
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            InsightPayload::Personality(_) => AnalysisType::Personality,
            InsightPayload::Compatibility(_) => AnalysisType::Compatibility,
            InsightPayload::Growth(_) => AnalysisType::Growth,
        }
    }

    /// Returns the shared narrative fields.
    pub fn narrative(&self) -> &Narrative {
        match self {
            InsightPayload::Personality(p) => &p.narrative,
            InsightPayload::Compatibility(c) => &c.narrative,
            InsightPayload::Growth(g) => &g.narrative,
        }
    }

    /// Returns the emotional profile, if this analysis type carries one.
    pub fn emotional_profile(&self) -> Option<&EmotionalProfile> {
        match self {
            InsightPayload::Personality(p) => Some(&p.emotional_profile),
            InsightPayload::Compatibility(c) => Some(&c.emotional_profile),
            InsightPayload::Growth(_) => None,
        }
    }

    /// Returns the average-compatibility field, if present.
    pub fn average_compatibility(&self) -> Option<f64> {
        match self {
            InsightPayload::Compatibility(c) => c.average_compatibility,
            _ => None,
        }
    }

    /// Returns the generation confidence.
    pub fn confidence(&self) -> Score {
        self.narrative().confidence
    }

    /// Validates the payload against its fixed schema.
    ///
    /// A payload that fails here must be replaced by a fallback template
    /// and never cached.
    pub fn validate(&self) -> Result<(), PayloadError> {
        let narrative = self.narrative();
        if narrative.summary.trim().is_empty() {
            return Err(PayloadError::EmptySection { section: "summary" });
        }
        if narrative.strengths.is_empty() {
            return Err(PayloadError::EmptySection { section: "strengths" });
        }
        if narrative.growth_areas.is_empty() {
            return Err(PayloadError::EmptySection { section: "growth_areas" });
        }
        if narrative.recommendations.is_empty() {
            return Err(PayloadError::EmptySection {
                section: "recommendations",
            });
        }
        if let Some(avg) = self.average_compatibility() {
            if avg.is_nan() || !(0.0..=1.0).contains(&avg) {
                return Err(PayloadError::OutOfRange {
                    field: "average_compatibility",
                    value: avg,
                });
            }
        }
        Ok(())
    }
}
