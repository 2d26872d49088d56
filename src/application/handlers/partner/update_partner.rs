//! UpdatePartnerHandler - edits an existing partner record.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, PartnerId, UserId};
use crate::domain::partner::{DurationBucket, OutcomeBucket, PartnerRecord};
use crate::domain::quiz::Archetype;
use crate::ports::{ChangeHandler, PartnerStore, RecordChange};

/// Command to update a partner record. `None` fields keep their current
/// value.
#[derive(Debug, Clone)]
pub struct UpdatePartnerCommand {
    pub user_id: UserId,
    pub id: PartnerId,
    pub archetype: Option<Archetype>,
    pub duration: Option<DurationBucket>,
    pub outcome: Option<OutcomeBucket>,
    pub notes: Option<String>,
}

/// Handler for editing partner records.
pub struct UpdatePartnerHandler {
    store: Arc<dyn PartnerStore>,
    change_handlers: Vec<Arc<dyn ChangeHandler>>,
}

impl UpdatePartnerHandler {
    pub fn new(store: Arc<dyn PartnerStore>) -> Self {
        Self {
            store,
            change_handlers: Vec::new(),
        }
    }

    /// Registers a handler to be notified after a successful update.
    pub fn with_change_handler(mut self, handler: Arc<dyn ChangeHandler>) -> Self {
        self.change_handlers.push(handler);
        self
    }

    pub async fn handle(&self, cmd: UpdatePartnerCommand) -> Result<PartnerRecord, DomainError> {
        let mut record = self
            .store
            .get(&cmd.user_id, cmd.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::PartnerNotFound,
                    format!("Partner record not found: {}", cmd.id),
                )
            })?;

        if let Some(archetype) = cmd.archetype {
            record.set_archetype(archetype);
        }
        let duration = cmd.duration.unwrap_or(record.duration());
        let outcome = cmd.outcome.unwrap_or(record.outcome());
        record.set_buckets(duration, outcome);
        if let Some(notes) = cmd.notes {
            record.set_notes(notes);
        }

        self.store.update(&record).await?;
        info!(user_id = %record.user_id(), partner_id = %record.id(), "partner record updated");

        for handler in &self.change_handlers {
            if let Err(err) = handler
                .handle(RecordChange::PartnerUpdated(record.clone()))
                .await
            {
                tracing::warn!(handler = handler.name(), error = %err, "change handler failed");
            }
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::partner::InMemoryPartnerStore;

    fn seeded_record(user: &UserId) -> PartnerRecord {
        PartnerRecord::new(
            user.clone(),
            Archetype::Coffee,
            DurationBucket::OneToThreeYears,
            OutcomeBucket::Amicable,
            "",
        )
    }

    #[tokio::test]
    async fn updates_only_the_given_fields() {
        let store = Arc::new(InMemoryPartnerStore::new());
        let user = UserId::new("u1").unwrap();
        let record = seeded_record(&user);
        store.save(&record).await.unwrap();

        let handler = UpdatePartnerHandler::new(store);
        let updated = handler
            .handle(UpdatePartnerCommand {
                user_id: user,
                id: record.id(),
                archetype: Some(Archetype::Mint),
                duration: None,
                outcome: Some(OutcomeBucket::Ongoing),
                notes: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.archetype(), Archetype::Mint);
        assert_eq!(updated.duration(), DurationBucket::OneToThreeYears);
        assert_eq!(updated.outcome(), OutcomeBucket::Ongoing);
    }

    #[tokio::test]
    async fn updating_anothers_record_is_not_found() {
        let store = Arc::new(InMemoryPartnerStore::new());
        let owner = UserId::new("owner").unwrap();
        let record = seeded_record(&owner);
        store.save(&record).await.unwrap();

        let handler = UpdatePartnerHandler::new(store);
        let result = handler
            .handle(UpdatePartnerCommand {
                user_id: UserId::new("intruder").unwrap(),
                id: record.id(),
                archetype: None,
                duration: None,
                outcome: None,
                notes: Some("hijacked".to_string()),
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::PartnerNotFound);
    }
}
