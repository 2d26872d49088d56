//! Metrics aggregator - composite relationship-intelligence scores.
//!
//! Pure functions from partner history plus an insight payload to normalized
//! scores in [0,1]. Recomputed on demand, never persisted as source of
//! truth.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::foundation::Score;
use crate::domain::insight::InsightPayload;
use crate::domain::partner::PartnerRecord;
use crate::domain::quiz::Archetype;

/// Minimum history length for a meaningful aggregate.
pub const MIN_HISTORY_LEN: usize = 2;

/// The declared weight table for the overall score.
///
/// Part of the crate's stable contract: changing these weights changes the
/// meaning of already-delivered metrics and requires a version bump.
#[derive(Debug, Clone, Copy)]
pub struct MetricWeights {
    pub emotional_distance: f64,
    pub compatibility_quotient: f64,
    pub archetype_consistency: f64,
    pub readiness: f64,
}

impl MetricWeights {
    /// Sum of all weights. Must equal 1.0; covered by a test invariant.
    pub fn total(&self) -> f64 {
        self.emotional_distance
            + self.compatibility_quotient
            + self.archetype_consistency
            + self.readiness
    }
}

/// The fixed weights. Not user-configurable.
pub const WEIGHTS: MetricWeights = MetricWeights {
    emotional_distance: 0.25,
    compatibility_quotient: 0.25,
    archetype_consistency: 0.20,
    readiness: 0.30,
};

/// Derived composite scores, all in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeMetrics {
    pub emotional_distance: Score,
    pub compatibility_quotient: Score,
    pub archetype_consistency: Score,
    pub readiness: Score,
    pub overall: Score,
}

/// Errors from aggregation.
#[derive(Debug, Clone, Error)]
pub enum AggregateError {
    /// Fewer partner records than the minimum for a meaningful result.
    /// The caller decides whether to show a placeholder.
    #[error("Need at least {required} partner records to aggregate, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

impl From<AggregateError> for crate::domain::foundation::DomainError {
    fn from(err: AggregateError) -> Self {
        use crate::domain::foundation::{DomainError, ErrorCode};
        match err {
            AggregateError::InsufficientData { required, actual } => {
                DomainError::new(ErrorCode::InsufficientData, err.to_string())
                    .with_detail("required", required.to_string())
                    .with_detail("actual", actual.to_string())
            }
        }
    }
}

/// Computes composite metrics from partner history and an insight payload.
///
/// Every sub-score and the overall score are clamped to [0,1] after
/// computation, guarding against malformed upstream payload numbers.
pub fn aggregate(
    history: &[PartnerRecord],
    insight: &InsightPayload,
) -> Result<CompositeMetrics, AggregateError> {
    if history.len() < MIN_HISTORY_LEN {
        return Err(AggregateError::InsufficientData {
            required: MIN_HISTORY_LEN,
            actual: history.len(),
        });
    }

    let archetype_consistency = consistency(history);
    let emotional_distance = emotional_distance(insight);
    let compatibility_quotient =
        Score::new(insight.average_compatibility().unwrap_or(0.5));
    let readiness = insight.confidence();

    let overall = Score::new(
        WEIGHTS.emotional_distance * emotional_distance.value()
            + WEIGHTS.compatibility_quotient * compatibility_quotient.value()
            + WEIGHTS.archetype_consistency * archetype_consistency.value()
            + WEIGHTS.readiness * readiness.value(),
    );

    Ok(CompositeMetrics {
        emotional_distance,
        compatibility_quotient,
        archetype_consistency,
        readiness,
        overall,
    })
}

/// Max archetype frequency over history length. Range [1/n, 1].
fn consistency(history: &[PartnerRecord]) -> Score {
    let mut counts: HashMap<Archetype, usize> = HashMap::new();
    for record in history {
        *counts.entry(record.archetype()).or_insert(0) += 1;
    }
    let max = counts.values().copied().max().unwrap_or(0);
    Score::new(max as f64 / history.len() as f64)
}

/// Mean of the three normalized emotional sub-scores.
///
/// A payload without an emotional profile contributes the neutral 0.5 for
/// all three, never a silent 0.
fn emotional_distance(insight: &InsightPayload) -> Score {
    match insight.emotional_profile() {
        Some(profile) => {
            let closeness = profile.attachment_style.closeness().value();
            let maturity = Score::new(profile.emotional_maturity).value();
            let availability = Score::new(profile.emotional_availability).value();
            Score::new((closeness + maturity + availability) / 3.0)
        }
        None => Score::NEUTRAL,
    }
}
