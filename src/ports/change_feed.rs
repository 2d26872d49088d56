//! Change Feed port - interface for reacting to partner record changes.
//!
//! Handlers register interest in record mutations without knowing about the
//! underlying transport (realtime channel, outbox poller, direct dispatch).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PartnerId, UserId};
use crate::domain::partner::PartnerRecord;

/// A mutation observed on the partner record set.
#[derive(Debug, Clone)]
pub enum RecordChange {
    /// A new record was inserted.
    PartnerInserted(PartnerRecord),
    /// An existing record was replaced.
    PartnerUpdated(PartnerRecord),
    /// A record was removed.
    PartnerDeleted { user_id: UserId, id: PartnerId },
}

impl RecordChange {
    /// The user whose record set changed.
    pub fn user_id(&self) -> &UserId {
        match self {
            RecordChange::PartnerInserted(record) | RecordChange::PartnerUpdated(record) => {
                record.user_id()
            }
            RecordChange::PartnerDeleted { user_id, .. } => user_id,
        }
    }
}

/// Handler for processing record changes.
///
/// Implementations should be idempotent - delivery may repeat after transport
/// reconnects - and quick, queueing long work instead of blocking the feed.
#[async_trait]
pub trait ChangeHandler: Send + Sync {
    /// Process one change notification.
    async fn handle(&self, change: RecordChange) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::partner::{DurationBucket, OutcomeBucket};
    use crate::domain::quiz::Archetype;

    #[allow(dead_code)]
    fn assert_handler_object_safe(_: &dyn ChangeHandler) {}

    fn sample_record() -> PartnerRecord {
        PartnerRecord::new(
            UserId::new("user-1").unwrap(),
            Archetype::Caramel,
            DurationBucket::OneToThreeYears,
            OutcomeBucket::Amicable,
            "",
        )
    }

    #[test]
    fn user_id_resolves_for_every_variant() {
        let record = sample_record();
        let user = record.user_id().clone();
        let id = record.id();

        let inserted = RecordChange::PartnerInserted(record.clone());
        let updated = RecordChange::PartnerUpdated(record);
        let deleted = RecordChange::PartnerDeleted {
            user_id: user.clone(),
            id,
        };

        assert_eq!(inserted.user_id(), &user);
        assert_eq!(updated.user_id(), &user);
        assert_eq!(deleted.user_id(), &user);
    }
}
