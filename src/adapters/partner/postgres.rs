//! PostgreSQL implementation of the partner store.
//!
//! Persists partner records to the `partner_records` table. Updates and
//! deletes are scoped by owner in the WHERE clause, so a mismatched user id
//! surfaces as not-found rather than touching another user's row.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{PartnerId, Timestamp, UserId};
use crate::domain::partner::{DurationBucket, OutcomeBucket, PartnerRecord};
use crate::domain::quiz::Archetype;
use crate::ports::{PartnerStore, PartnerStoreError};

/// PostgreSQL implementation of [`PartnerStore`].
#[derive(Clone)]
pub struct PostgresPartnerStore {
    pool: PgPool,
}

impl PostgresPartnerStore {
    /// Creates a new PostgresPartnerStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerStore for PostgresPartnerStore {
    async fn save(&self, record: &PartnerRecord) -> Result<(), PartnerStoreError> {
        sqlx::query(
            r#"
            INSERT INTO partner_records (
                id, user_id, archetype, duration, outcome, notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.user_id().as_str())
        .bind(record.archetype().as_str())
        .bind(record.duration().as_str())
        .bind(record.outcome().as_str())
        .bind(record.notes())
        .bind(record.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            PartnerStoreError::unavailable(format!("Failed to insert partner record: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, record: &PartnerRecord) -> Result<(), PartnerStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE partner_records SET
                archetype = $3,
                duration = $4,
                outcome = $5,
                notes = $6
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.user_id().as_str())
        .bind(record.archetype().as_str())
        .bind(record.duration().as_str())
        .bind(record.outcome().as_str())
        .bind(record.notes())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            PartnerStoreError::unavailable(format!("Failed to update partner record: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(PartnerStoreError::NotFound { id: record.id() });
        }

        Ok(())
    }

    async fn delete(&self, user_id: &UserId, id: PartnerId) -> Result<(), PartnerStoreError> {
        let result = sqlx::query("DELETE FROM partner_records WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                PartnerStoreError::unavailable(format!("Failed to delete partner record: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(PartnerStoreError::NotFound { id });
        }

        Ok(())
    }

    async fn get(
        &self,
        user_id: &UserId,
        id: PartnerId,
    ) -> Result<Option<PartnerRecord>, PartnerStoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, archetype, duration, outcome, notes, created_at
            FROM partner_records
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            PartnerStoreError::unavailable(format!("Failed to fetch partner record: {}", e))
        })?;

        match row {
            Some(row) => Ok(Some(row_to_record(row)?)),
            None => Ok(None),
        }
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PartnerRecord>, PartnerStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, archetype, duration, outcome, notes, created_at
            FROM partner_records
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            PartnerStoreError::unavailable(format!("Failed to list partner records: {}", e))
        })?;

        rows.into_iter().map(row_to_record).collect()
    }
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<PartnerRecord, PartnerStoreError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| corrupt("id", e.to_string()))?;

    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| corrupt("user_id", e.to_string()))?;
    let user_id = UserId::new(user_id).map_err(|e| corrupt("user_id", e.to_string()))?;

    let archetype: String = row
        .try_get("archetype")
        .map_err(|e| corrupt("archetype", e.to_string()))?;
    let archetype: Archetype = archetype
        .parse()
        .map_err(|e: String| corrupt("archetype", e))?;

    let duration: String = row
        .try_get("duration")
        .map_err(|e| corrupt("duration", e.to_string()))?;
    let duration: DurationBucket = duration
        .parse()
        .map_err(|e: String| corrupt("duration", e))?;

    let outcome: String = row
        .try_get("outcome")
        .map_err(|e| corrupt("outcome", e.to_string()))?;
    let outcome: OutcomeBucket = outcome.parse().map_err(|e: String| corrupt("outcome", e))?;

    let notes: String = row
        .try_get("notes")
        .map_err(|e| corrupt("notes", e.to_string()))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| corrupt("created_at", e.to_string()))?;

    Ok(PartnerRecord::from_parts(
        PartnerId::from_uuid(id),
        user_id,
        archetype,
        duration,
        outcome,
        notes,
        Timestamp::from_datetime(created_at),
    ))
}

fn corrupt(column: &str, message: String) -> PartnerStoreError {
    PartnerStoreError::Corrupt {
        message: format!("column {}: {}", column, message),
    }
}
