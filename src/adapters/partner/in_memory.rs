//! In-memory partner store for testing and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{PartnerId, UserId};
use crate::domain::partner::PartnerRecord;
use crate::ports::{PartnerStore, PartnerStoreError};

/// In-memory partner store keyed by record id.
#[derive(Debug, Default)]
pub struct InMemoryPartnerStore {
    records: Arc<RwLock<HashMap<PartnerId, PartnerRecord>>>,
    /// When set, every operation fails as if the store were down.
    unavailable: AtomicBool,
}

impl InMemoryPartnerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles simulated outage for resilience tests.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of records held. Test hook.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Removes all records. Test hook.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    fn check_available(&self) -> Result<(), PartnerStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(PartnerStoreError::unavailable("simulated store outage"));
        }
        Ok(())
    }
}

#[async_trait]
impl PartnerStore for InMemoryPartnerStore {
    async fn save(&self, record: &PartnerRecord) -> Result<(), PartnerStoreError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &PartnerRecord) -> Result<(), PartnerStoreError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        match records.get(&record.id()) {
            Some(existing) if existing.user_id() == record.user_id() => {
                records.insert(record.id(), record.clone());
                Ok(())
            }
            _ => Err(PartnerStoreError::NotFound { id: record.id() }),
        }
    }

    async fn delete(&self, user_id: &UserId, id: PartnerId) -> Result<(), PartnerStoreError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        match records.get(&id) {
            Some(existing) if existing.user_id() == user_id => {
                records.remove(&id);
                Ok(())
            }
            _ => Err(PartnerStoreError::NotFound { id }),
        }
    }

    async fn get(
        &self,
        user_id: &UserId,
        id: PartnerId,
    ) -> Result<Option<PartnerRecord>, PartnerStoreError> {
        self.check_available()?;
        let records = self.records.read().await;
        Ok(records
            .get(&id)
            .filter(|record| record.user_id() == user_id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PartnerRecord>, PartnerStoreError> {
        self.check_available()?;
        let records = self.records.read().await;
        let mut matching: Vec<PartnerRecord> = records
            .values()
            .filter(|record| record.user_id() == user_id)
            .cloned()
            .collect();
        matching.sort_by_key(|record| record.created_at().as_unix_secs());
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::partner::{DurationBucket, OutcomeBucket};
    use crate::domain::quiz::Archetype;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn record_for(user_id: &UserId, archetype: Archetype) -> PartnerRecord {
        PartnerRecord::new(
            user_id.clone(),
            archetype,
            DurationBucket::ThreeToTwelveMonths,
            OutcomeBucket::Amicable,
            "",
        )
    }

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let store = InMemoryPartnerStore::new();
        let owner = user("u1");
        let record = record_for(&owner, Archetype::Chocolate);

        store.save(&record).await.unwrap();
        let fetched = store.get(&owner, record.id()).await.unwrap().unwrap();
        assert_eq!(fetched, record);
    }

    #[tokio::test]
    async fn get_is_scoped_to_the_owner() {
        let store = InMemoryPartnerStore::new();
        let owner = user("u1");
        let other = user("u2");
        let record = record_for(&owner, Archetype::Vanilla);

        store.save(&record).await.unwrap();
        assert!(store.get(&other, record.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_empty_for_unknown_user() {
        let store = InMemoryPartnerStore::new();
        let listed = store.list_for_user(&user("nobody")).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn list_only_returns_the_users_records() {
        let store = InMemoryPartnerStore::new();
        let owner = user("u1");
        let other = user("u2");

        store.save(&record_for(&owner, Archetype::Coffee)).await.unwrap();
        store.save(&record_for(&owner, Archetype::Mint)).await.unwrap();
        store.save(&record_for(&other, Archetype::Chilli)).await.unwrap();

        let listed = store.list_for_user(&owner).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|r| r.user_id() == &owner));
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let store = InMemoryPartnerStore::new();
        let owner = user("u1");
        let mut record = record_for(&owner, Archetype::Caramel);
        store.save(&record).await.unwrap();

        record.set_archetype(Archetype::Coconut);
        store.update(&record).await.unwrap();

        let fetched = store.get(&owner, record.id()).await.unwrap().unwrap();
        assert_eq!(fetched.archetype(), Archetype::Coconut);
        assert_eq!(store.record_count().await, 1);
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let store = InMemoryPartnerStore::new();
        let record = record_for(&user("u1"), Archetype::Strawberry);
        assert!(matches!(
            store.update(&record).await,
            Err(PartnerStoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_is_scoped_to_the_owner() {
        let store = InMemoryPartnerStore::new();
        let owner = user("u1");
        let record = record_for(&owner, Archetype::Chocolate);
        store.save(&record).await.unwrap();

        let result = store.delete(&user("intruder"), record.id()).await;
        assert!(matches!(result, Err(PartnerStoreError::NotFound { .. })));
        assert_eq!(store.record_count().await, 1);

        store.delete(&owner, record.id()).await.unwrap();
        assert_eq!(store.record_count().await, 0);
    }

    #[tokio::test]
    async fn simulated_outage_fails_operations() {
        let store = InMemoryPartnerStore::new();
        store.set_unavailable(true);
        let result = store.list_for_user(&user("u1")).await;
        assert!(matches!(result, Err(PartnerStoreError::Unavailable { .. })));
    }
}
