//! ListPartnersHandler - read model for a user's partner history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::partner::PartnerRecord;
use crate::ports::PartnerStore;

/// Handler for listing a user's partner records.
pub struct ListPartnersHandler {
    store: Arc<dyn PartnerStore>,
}

impl ListPartnersHandler {
    pub fn new(store: Arc<dyn PartnerStore>) -> Self {
        Self { store }
    }

    /// Returns the user's records, oldest first. An empty history is a
    /// normal result for new users, not an error.
    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<PartnerRecord>, DomainError> {
        Ok(self.store.list_for_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::partner::InMemoryPartnerStore;
    use crate::domain::partner::{DurationBucket, OutcomeBucket};
    use crate::domain::quiz::Archetype;

    #[tokio::test]
    async fn empty_history_is_an_empty_list() {
        let handler = ListPartnersHandler::new(Arc::new(InMemoryPartnerStore::new()));
        let listed = handler.handle(&UserId::new("new-user").unwrap()).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn lists_only_the_users_records() {
        let store = Arc::new(InMemoryPartnerStore::new());
        let user = UserId::new("u1").unwrap();
        for archetype in [Archetype::Chocolate, Archetype::Mint] {
            store
                .save(&PartnerRecord::new(
                    user.clone(),
                    archetype,
                    DurationBucket::UnderThreeMonths,
                    OutcomeBucket::Amicable,
                    "",
                ))
                .await
                .unwrap();
        }

        let handler = ListPartnersHandler::new(store);
        let listed = handler.handle(&user).await.unwrap();
        assert_eq!(listed.len(), 2);
    }
}
