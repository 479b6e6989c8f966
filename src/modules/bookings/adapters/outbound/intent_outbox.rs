use crate::modules::bookings::core::intents::BookingIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use chrono::{DateTime, Utc};

/// Translate booking intents into outbox rows and enqueue them.
/// `revision` is the booking revision the intents were decided against.
pub async fn dispatch_intents<O>(
    outbox: &O,
    topic: &str,
    booking_id: &str,
    revision: u32,
    occurred_at: DateTime<Utc>,
    intents: Vec<BookingIntent>,
) -> Result<(), OutboxError>
where
    O: DomainOutbox + ?Sized,
{
    for intent in intents {
        let payload =
            serde_json::to_value(&intent).map_err(|e| OutboxError::Validation(e.to_string()))?;
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                intent_type: intent.name().to_string(),
                aggregate_id: booking_id.to_string(),
                revision,
                occurred_at,
                payload,
            })
            .await?;
    }
    Ok(())
}
