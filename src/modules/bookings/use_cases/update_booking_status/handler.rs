use crate::modules::bookings::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::ports::BookingStore;
use crate::modules::bookings::use_cases::decision::Decision;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::update_booking_status::command::UpdateBookingStatus;
use crate::modules::bookings::use_cases::update_booking_status::decide::decide_status;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;

pub struct UpdateBookingStatusHandler<TStore, TOutbox>
where
    TStore: BookingStore + ?Sized + 'static,
    TOutbox: DomainOutbox + ?Sized + 'static,
{
    topic: String,
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
}

impl<TStore, TOutbox> UpdateBookingStatusHandler<TStore, TOutbox>
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

    pub async fn handle(&self, command: UpdateBookingStatus) -> Result<Booking, ApplicationError> {
        let current = self
            .store
            .get(&command.booking_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(command.booking_id.clone()))?;

        match decide_status(&current, command) {
            Decision::Accepted { booking, intents } => {
                let stored = self
                    .store
                    .update_status(&booking.id, current.revision, booking.status, booking.updated_at)
                    .await?;
                dispatch_intents(
                    &*self.outbox,
                    &self.topic,
                    &stored.id,
                    stored.revision,
                    stored.updated_at,
                    intents,
                )
                .await?;
                info!(booking_id = %stored.id, from = %current.status, to = %stored.status, "booking status changed");
                Ok(stored)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
