//! Content-addressed fingerprints for insight requests.
//!
//! Two logically identical requests must produce the same fingerprint
//! regardless of field ordering, and any change to a semantically relevant
//! input must change it. Canonicalization (lowercasing, whitespace
//! normalization, sorted components) happens before hashing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::domain::insight::AnalysisType;
use crate::domain::partner::PartnerRecord;
use crate::domain::quiz::Archetype;

/// The semantically relevant slice of a partner record that feeds the
/// fingerprint: archetype, duration bucket, outcome bucket. Notes and ids
/// deliberately do not participate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerSummary {
    pub archetype: String,
    pub duration: String,
    pub outcome: String,
}

impl From<&PartnerRecord> for PartnerSummary {
    fn from(record: &PartnerRecord) -> Self {
        Self {
            archetype: record.archetype().as_str().to_string(),
            duration: record.duration().as_str().to_string(),
            outcome: record.outcome().as_str().to_string(),
        }
    }
}

impl PartnerSummary {
    fn canonical(&self) -> String {
        [
            normalize(&self.archetype),
            normalize(&self.duration),
            normalize(&self.outcome),
        ]
        .iter()
        .map(|field| length_prefixed(field))
        .collect::<Vec<_>>()
        .join("|")
    }
}

/// Deterministic digest of an insight request's relevant inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightFingerprint(String);

impl InsightFingerprint {
    /// Computes the fingerprint of (partner summaries, user archetype, user
    /// traits, lifestyle tags, analysis type).
    ///
    /// Partner summaries, traits and tags are sorted before hashing, so the
    /// caller's ordering never affects the result.
    pub fn compute(
        partners: &[PartnerSummary],
        archetype: Archetype,
        traits: &[String],
        lifestyle_tags: &[String],
        analysis_type: AnalysisType,
    ) -> Self {
        let mut partner_parts: Vec<String> =
            partners.iter().map(PartnerSummary::canonical).collect();
        partner_parts.sort();

        let canonical = format!(
            "v1\npartners:{}\narchetype:{}\ntraits:{}\ntags:{}\nanalysis:{}",
            partner_parts.join(";"),
            archetype.as_str(),
            sorted_tokens(traits),
            sorted_tokens(lifestyle_tags),
            analysis_type.as_str()
        );

        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Wraps a stored fingerprint string.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Returns the hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InsightFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercases and collapses internal whitespace to single spaces.
fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn sorted_tokens(values: &[String]) -> String {
    let mut tokens: Vec<String> = values.iter().map(|v| normalize(v)).collect();
    tokens.sort();
    tokens.dedup();
    tokens
        .iter()
        .map(|token| length_prefixed(token))
        .collect::<Vec<_>>()
        .join(",")
}

/// Prefixes a token with its byte length so tokens containing separator
/// characters cannot be confused with token boundaries. Without this,
/// the single trait `"a,b"` and the pair `["a", "b"]` would canonicalize
/// to the same string.
fn length_prefixed(token: &str) -> String {
    format!("{}:{}", token.len(), token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(archetype: &str) -> PartnerSummary {
        PartnerSummary {
            archetype: archetype.to_string(),
            duration: "one_to_three_years".to_string(),
            outcome: "amicable".to_string(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn identical_inputs_produce_identical_fingerprints() {
        let partners = vec![summary("chocolate"), summary("vanilla")];
        let traits = strings(&["curious", "direct"]);
        let tags = strings(&["night_owl"]);

        let a = InsightFingerprint::compute(
            &partners,
            Archetype::Chocolate,
            &traits,
            &tags,
            AnalysisType::Personality,
        );
        let b = InsightFingerprint::compute(
            &partners,
            Archetype::Chocolate,
            &traits,
            &tags,
            AnalysisType::Personality,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn reordered_inputs_produce_identical_fingerprints() {
        let forward = vec![summary("chocolate"), summary("vanilla"), summary("mint")];
        let reversed = vec![summary("mint"), summary("vanilla"), summary("chocolate")];

        let a = InsightFingerprint::compute(
            &forward,
            Archetype::Coffee,
            &strings(&["direct", "curious"]),
            &strings(&["gym", "books"]),
            AnalysisType::Growth,
        );
        let b = InsightFingerprint::compute(
            &reversed,
            Archetype::Coffee,
            &strings(&["curious", "direct"]),
            &strings(&["books", "gym"]),
            AnalysisType::Growth,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn whitespace_and_case_are_normalized() {
        let a = InsightFingerprint::compute(
            &[],
            Archetype::Mint,
            &strings(&["Night  Owl"]),
            &[],
            AnalysisType::Personality,
        );
        let b = InsightFingerprint::compute(
            &[],
            Archetype::Mint,
            &strings(&["night owl"]),
            &[],
            AnalysisType::Personality,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn trait_containing_a_separator_does_not_collide_with_split_traits() {
        let joined = InsightFingerprint::compute(
            &[],
            Archetype::Mint,
            &strings(&["a,b"]),
            &[],
            AnalysisType::Personality,
        );
        let split = InsightFingerprint::compute(
            &[],
            Archetype::Mint,
            &strings(&["a", "b"]),
            &[],
            AnalysisType::Personality,
        );
        assert_ne!(joined, split, "distinct trait sets must not share a fingerprint");
    }

    #[test]
    fn tag_containing_a_separator_does_not_collide_with_split_tags() {
        let joined = InsightFingerprint::compute(
            &[],
            Archetype::Coffee,
            &[],
            &strings(&["gym;books"]),
            AnalysisType::Growth,
        );
        let split = InsightFingerprint::compute(
            &[],
            Archetype::Coffee,
            &[],
            &strings(&["gym", "books"]),
            AnalysisType::Growth,
        );
        assert_ne!(joined, split);
    }

    #[test]
    fn changing_a_partner_archetype_changes_the_fingerprint() {
        let base = vec![summary("chocolate"), summary("vanilla")];
        let changed = vec![summary("chocolate"), summary("mint")];

        let a = InsightFingerprint::compute(
            &base,
            Archetype::Chocolate,
            &[],
            &[],
            AnalysisType::Personality,
        );
        let b = InsightFingerprint::compute(
            &changed,
            Archetype::Chocolate,
            &[],
            &[],
            AnalysisType::Personality,
        );
        assert_ne!(a, b);
    }

    #[test]
    fn changing_analysis_type_changes_the_fingerprint() {
        let partners = vec![summary("chocolate")];
        let a = InsightFingerprint::compute(
            &partners,
            Archetype::Chocolate,
            &[],
            &[],
            AnalysisType::Personality,
        );
        let b = InsightFingerprint::compute(
            &partners,
            Archetype::Chocolate,
            &[],
            &[],
            AnalysisType::Compatibility,
        );
        assert_ne!(a, b);
    }

    #[test]
    fn fingerprint_is_sha256_hex() {
        let fp = InsightFingerprint::compute(
            &[],
            Archetype::Vanilla,
            &[],
            &[],
            AnalysisType::Personality,
        );
        assert_eq!(fp.as_str().len(), 64);
        assert!(fp.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
