//! RefreshAchievementsHandler - recomputes progress and persists unlocks.
//!
//! Also a [`ChangeHandler`], so partner record mutations on the change feed
//! trigger a recomputation for the affected user. Unlocks only accumulate;
//! a regressed counter never re-locks anything.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::domain::achievements::{evaluate, Achievement};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{AchievementStore, ChangeHandler, PartnerStore, RecordChange};

/// Result of an achievement refresh.
#[derive(Debug, Clone)]
pub struct RefreshAchievementsResult {
    /// Every catalog achievement with its current unlock and progress state.
    pub achievements: Vec<Achievement>,
    /// Ids that transitioned to unlocked in this refresh.
    pub newly_unlocked: Vec<String>,
}

/// Handler for recomputing a user's achievements.
pub struct RefreshAchievementsHandler {
    partner_store: Arc<dyn PartnerStore>,
    achievement_store: Arc<dyn AchievementStore>,
}

impl RefreshAchievementsHandler {
    pub fn new(
        partner_store: Arc<dyn PartnerStore>,
        achievement_store: Arc<dyn AchievementStore>,
    ) -> Self {
        Self {
            partner_store,
            achievement_store,
        }
    }

    /// Recomputes counters from the current history, evaluates the catalog,
    /// and persists any new unlocks.
    pub async fn refresh(
        &self,
        user_id: &UserId,
    ) -> Result<RefreshAchievementsResult, DomainError> {
        let history = self.partner_store.list_for_user(user_id).await?;
        let state = self.achievement_store.load(user_id).await?;
        let state = state.with_history(&history);

        self.evaluate_and_save(user_id, state).await
    }

    /// Counts one more served insight and re-evaluates.
    pub async fn record_insight_generated(
        &self,
        user_id: &UserId,
    ) -> Result<RefreshAchievementsResult, DomainError> {
        let state = self.achievement_store.load(user_id).await?;
        let state = state.with_insight_generated();

        self.evaluate_and_save(user_id, state).await
    }

    async fn evaluate_and_save(
        &self,
        user_id: &UserId,
        state: crate::domain::achievements::UserProgressState,
    ) -> Result<RefreshAchievementsResult, DomainError> {
        let achievements = evaluate(&state.counters, state.unlocked());
        let newly_unlocked: Vec<String> = achievements
            .iter()
            .filter(|a| a.unlocked && !state.is_unlocked(&a.id))
            .map(|a| a.id.as_str().to_string())
            .collect();

        let state = state.with_unlocked(
            achievements
                .iter()
                .filter(|a| a.unlocked)
                .map(|a| a.id.clone()),
        );
        self.achievement_store.save(user_id, &state).await?;

        if !newly_unlocked.is_empty() {
            info!(user_id = %user_id, unlocked = ?newly_unlocked, "achievements unlocked");
        }

        Ok(RefreshAchievementsResult {
            achievements,
            newly_unlocked,
        })
    }
}

#[async_trait]
impl ChangeHandler for RefreshAchievementsHandler {
    async fn handle(&self, change: RecordChange) -> Result<(), DomainError> {
        self.refresh(change.user_id()).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "RefreshAchievementsHandler"
    }
}
