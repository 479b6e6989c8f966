use crate::modules::bookings::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::ports::{BookingStore, StoreError};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

pub struct DeleteBookingHandler<TStore, TOutbox>
where
    TStore: BookingStore + ?Sized + 'static,
    TOutbox: DomainOutbox + ?Sized + 'static,
{
    topic: String,
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
}

impl<TStore, TOutbox> DeleteBookingHandler<TStore, TOutbox>
where
    TStore: BookingStore + ?Sized + 'static,
    TOutbox: DomainOutbox + ?Sized + 'static,
{
    pub fn new(topic: impl Into<String>, store: Arc<TStore>, outbox: Arc<TOutbox>) -> Self {
        Self {
            topic: topic.into(),
            store,
            outbox,
        }
    }

    pub async fn handle(
        &self,
        booking_id: &str,
        deleted_at: DateTime<Utc>,
    ) -> Result<Booking, ApplicationError> {
        let removed = match self.store.delete(booking_id).await {
            Ok(removed) => removed,
            Err(StoreError::NotFound(id)) => return Err(ApplicationError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };
        dispatch_intents(
            &*self.outbox,
            &self.topic,
            &removed.id,
            removed.revision,
            deleted_at,
            vec![BookingIntent::BookingDeleted {
                booking_id: removed.id.clone(),
            }],
        )
        .await?;
        info!(booking_id = %removed.id, "booking deleted");
        Ok(removed)
    }
}
