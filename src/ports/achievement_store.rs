//! Achievement Store Port - persistence for per-user unlock state.
//!
//! A user with no stored state yet is a normal condition; `load` returns an
//! empty [`UserProgressState`] rather than an error so the unlock engine can
//! evaluate from scratch.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::achievements::UserProgressState;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors from the achievement store.
#[derive(Debug, Clone, Error)]
pub enum AchievementStoreError {
    /// The backing store cannot be reached.
    #[error("Achievement store unavailable: {message}")]
    Unavailable { message: String },

    /// A stored row could not be decoded.
    #[error("Failed to decode achievement state: {message}")]
    Corrupt { message: String },
}

impl AchievementStoreError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        AchievementStoreError::Unavailable {
            message: message.into(),
        }
    }
}

impl From<AchievementStoreError> for DomainError {
    fn from(err: AchievementStoreError) -> Self {
        match err {
            AchievementStoreError::Unavailable { message } => {
                DomainError::new(ErrorCode::StoreUnavailable, message)
            }
            AchievementStoreError::Corrupt { message } => {
                DomainError::new(ErrorCode::DatabaseError, message)
            }
        }
    }
}

/// Port for achievement progress persistence.
#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// Loads the user's progress state; empty state when none is stored.
    async fn load(&self, user_id: &UserId) -> Result<UserProgressState, AchievementStoreError>;

    /// Persists the user's progress state, replacing any previous snapshot.
    async fn save(
        &self,
        user_id: &UserId,
        state: &UserProgressState,
    ) -> Result<(), AchievementStoreError>;
}
