//! The fixed achievement catalog.

use once_cell::sync::Lazy;

use crate::domain::foundation::AchievementId;

use super::ProgressCounters;

/// One catalog achievement: an id, display copy, and an unlock rule.
///
/// Threshold achievements expose a progress/max pair and unlock exactly when
/// progress reaches max; flag achievements use a bare predicate.
pub struct AchievementSpec {
    id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    rule: UnlockRule,
}

enum UnlockRule {
    Predicate(fn(&ProgressCounters) -> bool),
    Threshold {
        current: fn(&ProgressCounters) -> u32,
        max: u32,
    },
}

impl AchievementSpec {
    /// Returns the achievement id.
    pub fn id(&self) -> AchievementId {
        AchievementId::new(self.id)
    }

    /// Evaluates the unlock rule against counters.
    pub fn is_satisfied(&self, counters: &ProgressCounters) -> bool {
        match &self.rule {
            UnlockRule::Predicate(p) => p(counters),
            UnlockRule::Threshold { current, max } => current(counters) >= *max,
        }
    }

    /// Returns (progress, max_progress) for threshold achievements, with
    /// progress clamped to max.
    pub fn progress(&self, counters: &ProgressCounters) -> Option<(u32, u32)> {
        match &self.rule {
            UnlockRule::Predicate(_) => None,
            UnlockRule::Threshold { current, max } => Some((current(counters).min(*max), *max)),
        }
    }
}

static CATALOG: Lazy<Vec<AchievementSpec>> = Lazy::new(|| {
    vec![
        AchievementSpec {
            id: "first_taste",
            title: "First Taste",
            description: "Analyze your first past partner",
            rule: UnlockRule::Threshold {
                current: |c| c.partners_analyzed,
                max: 1,
            },
        },
        AchievementSpec {
            id: "deep_diver",
            title: "Deep Diver",
            description: "Analyze five past partners",
            rule: UnlockRule::Threshold {
                current: |c| c.partners_analyzed,
                max: 5,
            },
        },
        AchievementSpec {
            id: "flavour_collector",
            title: "Flavour Collector",
            description: "See four different flavour archetypes in your history",
            rule: UnlockRule::Threshold {
                current: |c| c.archetypes_seen,
                max: 4,
            },
        },
        AchievementSpec {
            id: "quiz_regular",
            title: "Quiz Regular",
            description: "Complete three quizzes",
            rule: UnlockRule::Threshold {
                current: |c| c.quizzes_completed,
                max: 3,
            },
        },
        AchievementSpec {
            id: "insight_seeker",
            title: "Insight Seeker",
            description: "Generate ten insights",
            rule: UnlockRule::Threshold {
                current: |c| c.insights_generated,
                max: 10,
            },
        },
        AchievementSpec {
            id: "open_book",
            title: "Open Book",
            description: "Fill in your whole profile",
            rule: UnlockRule::Predicate(|c| c.profile_completion_pct >= 100),
        },
    ]
});

/// The fixed achievement catalog, in declaration order.
pub fn achievement_catalog() -> &'static [AchievementSpec] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = achievement_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn threshold_achievement_unlocks_exactly_at_max() {
        let spec = &achievement_catalog()[1]; // deep_diver, max 5
        let mut counters = ProgressCounters::default();

        counters.partners_analyzed = 4;
        assert!(!spec.is_satisfied(&counters));
        assert_eq!(spec.progress(&counters), Some((4, 5)));

        counters.partners_analyzed = 5;
        assert!(spec.is_satisfied(&counters));
        assert_eq!(spec.progress(&counters), Some((5, 5)));
    }

    #[test]
    fn progress_is_clamped_to_max() {
        let spec = &achievement_catalog()[0]; // first_taste, max 1
        let counters = ProgressCounters {
            partners_analyzed: 9,
            ..ProgressCounters::default()
        };
        assert_eq!(spec.progress(&counters), Some((1, 1)));
    }

    #[test]
    fn predicate_achievement_has_no_progress_pair() {
        let open_book = achievement_catalog()
            .iter()
            .find(|s| s.id() == AchievementId::new("open_book"))
            .unwrap();
        let counters = ProgressCounters::default().with_profile_completion(100);

        assert!(open_book.is_satisfied(&counters));
        assert_eq!(open_book.progress(&counters), None);
    }
}
