//! Partner Store Port - row-store CRUD for partner records.
//!
//! Every operation is scoped by the authenticated user's id; row-level
//! ownership is enforced by the external store's access policy, not by this
//! crate. "No rows" is a legitimate empty state, not an error.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PartnerId, UserId};
use crate::domain::partner::PartnerRecord;

/// Errors from the partner store.
#[derive(Debug, Clone, Error)]
pub enum PartnerStoreError {
    /// The backing store cannot be reached.
    #[error("Partner store unavailable: {message}")]
    Unavailable { message: String },

    /// Update or delete targeted a record that does not exist for this user.
    #[error("Partner record not found: {id}")]
    NotFound { id: PartnerId },

    /// A stored row could not be decoded.
    #[error("Failed to decode partner row: {message}")]
    Corrupt { message: String },
}

impl PartnerStoreError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        PartnerStoreError::Unavailable {
            message: message.into(),
        }
    }
}

impl From<PartnerStoreError> for DomainError {
    fn from(err: PartnerStoreError) -> Self {
        match err {
            PartnerStoreError::Unavailable { message } => {
                DomainError::new(ErrorCode::StoreUnavailable, message)
            }
            PartnerStoreError::NotFound { id } => DomainError::new(
                ErrorCode::PartnerNotFound,
                format!("Partner record not found: {}", id),
            ),
            PartnerStoreError::Corrupt { message } => {
                DomainError::new(ErrorCode::DatabaseError, message)
            }
        }
    }
}

/// Port for partner record persistence.
#[async_trait]
pub trait PartnerStore: Send + Sync {
    /// Inserts a new record.
    async fn save(&self, record: &PartnerRecord) -> Result<(), PartnerStoreError>;

    /// Replaces an existing record owned by the same user.
    async fn update(&self, record: &PartnerRecord) -> Result<(), PartnerStoreError>;

    /// Deletes a record by id, scoped to the owner.
    async fn delete(&self, user_id: &UserId, id: PartnerId) -> Result<(), PartnerStoreError>;

    /// Fetches one record, `None` when absent.
    async fn get(
        &self,
        user_id: &UserId,
        id: PartnerId,
    ) -> Result<Option<PartnerRecord>, PartnerStoreError>;

    /// Lists all records for a user, oldest first. Empty when none exist.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PartnerRecord>, PartnerStoreError>;
}
