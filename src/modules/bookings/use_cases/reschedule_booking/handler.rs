use crate::modules::bookings::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::policy::BookingPolicy;
use crate::modules::bookings::core::ports::BookingStore;
use crate::modules::bookings::use_cases::decision::{DecideError, Decision};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::reschedule_booking::command::RescheduleBooking;
use crate::modules::bookings::use_cases::reschedule_booking::decide::decide_reschedule;
use crate::modules::bookings::use_cases::slot_write_lock::SlotWriteLock;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RescheduleBookingHandler<TStore, TOutbox>
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

impl<TStore, TOutbox> RescheduleBookingHandler<TStore, TOutbox>
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

    pub async fn handle(&self, command: RescheduleBooking) -> Result<Booking, ApplicationError> {
        let _slot = self.slot_lock.acquire().await;
        let bookings = self.store.list_bookings().await?;
        let current = bookings
            .iter()
            .find(|b| b.id == command.booking_id)
            .cloned()
            .ok_or_else(|| ApplicationError::NotFound(command.booking_id.clone()))?;
        let reservations: Vec<_> = bookings.iter().map(Booking::reservation).collect();

        match decide_reschedule(&self.policy, &reservations, &current, command) {
            Decision::Accepted { booking, intents } => {
                let stored = self
                    .store
                    .reschedule(
                        &booking.id,
                        current.revision,
                        booking.date,
                        booking.start_time,
                        booking.duration,
                        booking.updated_at,
                    )
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
                info!(
                    booking_id = %stored.id,
                    date = %stored.date,
                    start_time = %stored.start_time,
                    "booking rescheduled"
                );
                Ok(stored)
            }
            Decision::Rejected {
                reason: DecideError::SlotTaken { conflicting_id },
            } => {
                warn!(booking_id = %current.id, %conflicting_id, "reschedule rejected, slot taken");
                Err(ApplicationError::SlotTaken { conflicting_id })
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
