//! Progress counters and user progress state.
//!
//! `UserProgressState` replaces scattered client-side state with one explicit
//! struct and pure update functions; persisting it is a side effect at the
//! store boundary, never interleaved with computation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::AchievementId;
use crate::domain::partner::PartnerRecord;
use crate::domain::quiz::Archetype;

/// Counters that achievement predicates are evaluated over.
///
/// All derivable from partner records and quiz/insight activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressCounters {
    pub partners_analyzed: u32,
    pub archetypes_seen: u32,
    /// Profile completion percent, 0-100.
    pub profile_completion_pct: u8,
    pub quizzes_completed: u32,
    pub insights_generated: u32,
}

impl ProgressCounters {
    /// Derives the partner-driven counters from a history snapshot.
    pub fn from_history(history: &[PartnerRecord]) -> Self {
        let distinct: HashSet<Archetype> =
            history.iter().map(PartnerRecord::archetype).collect();
        Self {
            partners_analyzed: history.len() as u32,
            archetypes_seen: distinct.len() as u32,
            ..Self::default()
        }
    }

    /// Returns a copy with the activity counters set.
    pub fn with_activity(mut self, quizzes_completed: u32, insights_generated: u32) -> Self {
        self.quizzes_completed = quizzes_completed;
        self.insights_generated = insights_generated;
        self
    }

    /// Returns a copy with the profile completion percent, clamped to 100.
    pub fn with_profile_completion(mut self, pct: u8) -> Self {
        self.profile_completion_pct = pct.min(100);
        self
    }
}

/// A user's accumulated progress and unlocked achievements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProgressState {
    pub counters: ProgressCounters,
    unlocked: HashSet<AchievementId>,
}

impl UserProgressState {
    /// Creates an empty progress state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstitutes state from stored counters and unlocked ids.
    pub fn from_parts(counters: ProgressCounters, unlocked: HashSet<AchievementId>) -> Self {
        Self { counters, unlocked }
    }

    /// Returns the unlocked achievement ids.
    pub fn unlocked(&self) -> &HashSet<AchievementId> {
        &self.unlocked
    }

    /// Returns true if the achievement has ever been unlocked.
    pub fn is_unlocked(&self, id: &AchievementId) -> bool {
        self.unlocked.contains(id)
    }

    /// Returns a new state with counters recomputed from a history snapshot,
    /// keeping activity counters and unlocks.
    pub fn with_history(&self, history: &[PartnerRecord]) -> Self {
        let derived = ProgressCounters::from_history(history);
        Self {
            counters: ProgressCounters {
                partners_analyzed: derived.partners_analyzed,
                archetypes_seen: derived.archetypes_seen,
                ..self.counters
            },
            unlocked: self.unlocked.clone(),
        }
    }

    /// Returns a new state with one more completed quiz.
    pub fn with_quiz_completed(&self) -> Self {
        let mut next = self.clone();
        next.counters.quizzes_completed = next.counters.quizzes_completed.saturating_add(1);
        next
    }

    /// Returns a new state with one more generated insight.
    pub fn with_insight_generated(&self) -> Self {
        let mut next = self.clone();
        next.counters.insights_generated = next.counters.insights_generated.saturating_add(1);
        next
    }

    /// Returns a new state with additional unlocked ids merged in.
    ///
    /// Unlocks only accumulate; nothing is ever removed.
    pub fn with_unlocked(&self, ids: impl IntoIterator<Item = AchievementId>) -> Self {
        let mut next = self.clone();
        next.unlocked.extend(ids);
        next
    }
}
