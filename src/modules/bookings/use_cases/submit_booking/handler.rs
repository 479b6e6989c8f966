use crate::modules::bookings::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::policy::BookingPolicy;
use crate::modules::bookings::core::ports::BookingStore;
use crate::modules::bookings::use_cases::decision::{DecideError, Decision};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::slot_write_lock::SlotWriteLock;
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use crate::modules::bookings::use_cases::submit_booking::decide::decide_submit;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub struct SubmitBookingHandler<TStore, TOutbox>
where
    TStore: BookingStore + ?Sized + 'static,
    TOutbox: DomainOutbox + ?Sized + 'static,
{
    topic: String,
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
    policy: Arc<BookingPolicy>,
    slot_lock: SlotWriteLock,
}

impl<TStore, TOutbox> SubmitBookingHandler<TStore, TOutbox>
where
    TStore: BookingStore + ?Sized + 'static,
    TOutbox: DomainOutbox + ?Sized + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        store: Arc<TStore>,
        outbox: Arc<TOutbox>,
        policy: Arc<BookingPolicy>,
        slot_lock: SlotWriteLock,
    ) -> Self {
        Self {
            topic: topic.into(),
            store,
            outbox,
            policy,
            slot_lock,
        }
    }

    pub async fn handle(&self, command: SubmitBooking) -> Result<Booking, ApplicationError> {
        let _slot = self.slot_lock.acquire().await;
        let reservations = self.store.list_reservations().await?;

        match decide_submit(&self.policy, &reservations, command) {
            Decision::Accepted { booking, intents } => {
                self.store.insert(booking.clone()).await?;
                dispatch_intents(
                    &*self.outbox,
                    &self.topic,
                    &booking.id,
                    booking.revision,
                    booking.created_at,
                    intents,
                )
                .await?;
                info!(
                    booking_id = %booking.id,
                    date = %booking.date,
                    start_time = %booking.start_time,
                    duration = %booking.duration,
                    "booking accepted"
                );
                Ok(booking)
            }
            Decision::Rejected {
                reason: DecideError::SlotTaken { conflicting_id },
            } => {
                warn!(%conflicting_id, "booking rejected, slot taken");
                Err(ApplicationError::SlotTaken { conflicting_id })
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
