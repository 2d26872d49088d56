//! CreatePartnerHandler - adds a partner record to the user's history.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::partner::{DurationBucket, OutcomeBucket, PartnerRecord};
use crate::domain::quiz::Archetype;
use crate::ports::{ChangeHandler, PartnerStore, RecordChange};

/// Command to create a partner record.
#[derive(Debug, Clone)]
pub struct CreatePartnerCommand {
    pub user_id: UserId,
    pub archetype: Archetype,
    pub duration: DurationBucket,
    pub outcome: OutcomeBucket,
    pub notes: Option<String>,
}

/// Handler for creating partner records.
pub struct CreatePartnerHandler {
    store: Arc<dyn PartnerStore>,
    change_handlers: Vec<Arc<dyn ChangeHandler>>,
}

impl CreatePartnerHandler {
    pub fn new(store: Arc<dyn PartnerStore>) -> Self {
        Self {
            store,
            change_handlers: Vec::new(),
        }
    }

    /// Registers a handler to be notified after a successful insert.
    pub fn with_change_handler(mut self, handler: Arc<dyn ChangeHandler>) -> Self {
        self.change_handlers.push(handler);
        self
    }

    pub async fn handle(&self, cmd: CreatePartnerCommand) -> Result<PartnerRecord, DomainError> {
        let record = PartnerRecord::new(
            cmd.user_id,
            cmd.archetype,
            cmd.duration,
            cmd.outcome,
            cmd.notes.unwrap_or_default(),
        );

        self.store.save(&record).await?;
        info!(user_id = %record.user_id(), partner_id = %record.id(), "partner record created");

        self.notify(RecordChange::PartnerInserted(record.clone()))
            .await;
        Ok(record)
    }

    async fn notify(&self, change: RecordChange) {
        for handler in &self.change_handlers {
            // Notification failures never fail the write that triggered them.
            if let Err(err) = handler.handle(change.clone()).await {
                tracing::warn!(handler = handler.name(), error = %err, "change handler failed");
            }
        }
    }
}
