//! In-memory achievement store for testing and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::achievements::UserProgressState;
use crate::domain::foundation::UserId;
use crate::ports::{AchievementStore, AchievementStoreError};

/// In-memory achievement store keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryAchievementStore {
    states: Arc<RwLock<HashMap<UserId, UserProgressState>>>,
}

impl InMemoryAchievementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all stored states. Test hook.
    pub async fn clear(&self) {
        self.states.write().await.clear();
    }
}

#[async_trait]
impl AchievementStore for InMemoryAchievementStore {
    async fn load(&self, user_id: &UserId) -> Result<UserProgressState, AchievementStoreError> {
        let states = self.states.read().await;
        Ok(states.get(user_id).cloned().unwrap_or_default())
    }

    async fn save(
        &self,
        user_id: &UserId,
        state: &UserProgressState,
    ) -> Result<(), AchievementStoreError> {
        let mut states = self.states.write().await;
        states.insert(user_id.clone(), state.clone());
        Ok(())
    }
}
