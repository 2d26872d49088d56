//! PostgreSQL implementation of the achievement store.
//!
//! One row per user holding the progress state snapshot as JSONB. `save`
//! upserts, so repeated refreshes keep a single row per user.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::achievements::UserProgressState;
use crate::domain::foundation::UserId;
use crate::ports::{AchievementStore, AchievementStoreError};

/// PostgreSQL implementation of [`AchievementStore`].
#[derive(Clone)]
pub struct PostgresAchievementStore {
    pool: PgPool,
}

impl PostgresAchievementStore {
    /// Creates a new PostgresAchievementStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementStore for PostgresAchievementStore {
    async fn load(&self, user_id: &UserId) -> Result<UserProgressState, AchievementStoreError> {
        let row = sqlx::query("SELECT state FROM achievement_states WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AchievementStoreError::unavailable(format!(
                    "Failed to fetch achievement state: {}",
                    e
                ))
            })?;

        match row {
            Some(row) => {
                let state_json: serde_json::Value =
                    row.try_get("state").map_err(|e| AchievementStoreError::Corrupt {
                        message: format!("Failed to get state: {}", e),
                    })?;
                serde_json::from_value(state_json).map_err(|e| AchievementStoreError::Corrupt {
                    message: format!("Failed to decode state: {}", e),
                })
            }
            // No row yet is a normal "no data" state for new users.
            None => Ok(UserProgressState::new()),
        }
    }

    async fn save(
        &self,
        user_id: &UserId,
        state: &UserProgressState,
    ) -> Result<(), AchievementStoreError> {
        let state_json =
            serde_json::to_value(state).map_err(|e| AchievementStoreError::Corrupt {
                message: format!("Failed to encode state: {}", e),
            })?;

        sqlx::query(
            r#"
            INSERT INTO achievement_states (user_id, state, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                state = EXCLUDED.state,
                updated_at = NOW()
            "#,
        )
        .bind(user_id.as_str())
        .bind(state_json)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AchievementStoreError::unavailable(format!("Failed to upsert achievement state: {}", e))
        })?;

        Ok(())
    }
}
