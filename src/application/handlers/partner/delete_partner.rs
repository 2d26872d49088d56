//! DeletePartnerHandler - removes a partner record.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, PartnerId, UserId};
use crate::ports::{ChangeHandler, PartnerStore, RecordChange};

/// Command to delete a partner record.
#[derive(Debug, Clone)]
pub struct DeletePartnerCommand {
    pub user_id: UserId,
    pub id: PartnerId,
}

/// Handler for deleting partner records.
pub struct DeletePartnerHandler {
    store: Arc<dyn PartnerStore>,
    change_handlers: Vec<Arc<dyn ChangeHandler>>,
}

impl DeletePartnerHandler {
    pub fn new(store: Arc<dyn PartnerStore>) -> Self {
        Self {
            store,
            change_handlers: Vec::new(),
        }
    }

    /// Registers a handler to be notified after a successful delete.
    pub fn with_change_handler(mut self, handler: Arc<dyn ChangeHandler>) -> Self {
        self.change_handlers.push(handler);
        self
    }

    pub async fn handle(&self, cmd: DeletePartnerCommand) -> Result<(), DomainError> {
        self.store.delete(&cmd.user_id, cmd.id).await?;
        info!(user_id = %cmd.user_id, partner_id = %cmd.id, "partner record deleted");

        for handler in &self.change_handlers {
            let change = RecordChange::PartnerDeleted {
                user_id: cmd.user_id.clone(),
                id: cmd.id,
            };
            if let Err(err) = handler.handle(change).await {
                tracing::warn!(handler = handler.name(), error = %err, "change handler failed");
            }
        }
        Ok(())
    }
}
