//! PostgreSQL implementation of the insight cache.
//!
//! One row per fingerprint, payload stored as JSONB. `put` upserts via
//! `ON CONFLICT`, so concurrent writers for the same fingerprint collapse to
//! a single row with the last writer winning.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::Timestamp;
use crate::domain::insight::{InsightFingerprint, InsightPayload};
use crate::ports::{CacheEntry, CacheStoreError, InsightCache};

/// PostgreSQL implementation of [`InsightCache`].
#[derive(Clone)]
pub struct PostgresInsightCache {
    pool: PgPool,
}

impl PostgresInsightCache {
    /// Creates a new PostgresInsightCache.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InsightCache for PostgresInsightCache {
    async fn get(
        &self,
        fingerprint: &InsightFingerprint,
    ) -> Result<Option<CacheEntry>, CacheStoreError> {
        let row = sqlx::query(
            r#"
            SELECT fingerprint, payload, created_at, expires_at
            FROM insight_cache
            WHERE fingerprint = $1 AND expires_at > NOW()
            "#,
        )
        .bind(fingerprint.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CacheStoreError::unavailable(format!("Failed to fetch cache entry: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_entry(row)?)),
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        fingerprint: &InsightFingerprint,
        payload: InsightPayload,
        ttl_hours: i64,
    ) -> Result<CacheEntry, CacheStoreError> {
        let entry = CacheEntry::new(fingerprint.clone(), payload, ttl_hours, Timestamp::now());
        let payload_json = serde_json::to_value(&entry.payload)
            .map_err(|e| CacheStoreError::corrupt(format!("Failed to encode payload: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO insight_cache (fingerprint, payload, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (fingerprint) DO UPDATE SET
                payload = EXCLUDED.payload,
                created_at = EXCLUDED.created_at,
                expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(entry.fingerprint.as_str())
        .bind(payload_json)
        .bind(entry.created_at.as_datetime())
        .bind(entry.expires_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| CacheStoreError::unavailable(format!("Failed to upsert cache entry: {}", e)))?;

        Ok(entry)
    }
}

fn row_to_entry(row: sqlx::postgres::PgRow) -> Result<CacheEntry, CacheStoreError> {
    let fingerprint: String = row
        .try_get("fingerprint")
        .map_err(|e| CacheStoreError::corrupt(format!("Failed to get fingerprint: {}", e)))?;

    let payload_json: serde_json::Value = row
        .try_get("payload")
        .map_err(|e| CacheStoreError::corrupt(format!("Failed to get payload: {}", e)))?;
    let payload: InsightPayload = serde_json::from_value(payload_json)
        .map_err(|e| CacheStoreError::corrupt(format!("Failed to decode payload: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| CacheStoreError::corrupt(format!("Failed to get created_at: {}", e)))?;
    let expires_at: chrono::DateTime<chrono::Utc> = row
        .try_get("expires_at")
        .map_err(|e| CacheStoreError::corrupt(format!("Failed to get expires_at: {}", e)))?;

    Ok(CacheEntry {
        fingerprint: InsightFingerprint::from_hex(fingerprint),
        payload,
        created_at: Timestamp::from_datetime(created_at),
        expires_at: Timestamp::from_datetime(expires_at),
    })
}
