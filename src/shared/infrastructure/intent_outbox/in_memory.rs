use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, u32, String)>>,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn intent_types(&self) -> Vec<String> {
        self.rows
            .lock()
            .await
            .iter()
            .map(|row| row.intent_type.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        let key = (row.aggregate_id.clone(), row.revision, row.intent_type.clone());
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    aggregate_id: row.aggregate_id,
                    revision: row.revision,
                    intent_type: row.intent_type,
                });
            }
        }
        tracing::debug!(intent = %row.intent_type, booking_id = %row.aggregate_id, "intent enqueued");
        self.rows.lock().await.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_domain_outbox_tests {
    use super::*;
    use crate::tests::fixtures::bookings::fixed_created_at;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn row() -> OutboxRow {
        OutboxRow {
            topic: "bookings".to_string(),
            intent_type: "BookingSubmitted".to_string(),
            aggregate_id: "bk-1".to_string(),
            revision: 1,
            occurred_at: fixed_created_at(),
            payload: json!({ "id": "bk-1" }),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_the_intent(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        assert!(outbox.enqueue(row).await.is_ok());
        assert_eq!(outbox.intent_types().await, vec!["BookingSubmitted"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_enqueue_a_duplicate_intent(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        outbox.enqueue(row.clone()).await.unwrap();
        let result = outbox.enqueue(row).await;
        assert!(matches!(
            result,
            Err(OutboxError::Duplicate { revision: 1, .. })
        ));
        assert_eq!(outbox.rows.lock().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_the_same_booking_at_a_later_revision(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        let mut later = row.clone();
        later.revision = 2;
        outbox.enqueue(row).await.unwrap();
        assert!(outbox.enqueue(later).await.is_ok());
    }
}
