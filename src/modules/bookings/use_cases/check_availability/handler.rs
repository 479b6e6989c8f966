// Availability queries over the current reservation snapshot.
//
// Each call takes a fresh snapshot from the store and runs the pure engine on it.
// Listed starts also pass the booking policy for the same "now", so every listed
// start can be submitted as is.

use crate::modules::bookings::core::overlap::is_available;
use crate::modules::bookings::core::policy::BookingPolicy;
use crate::modules::bookings::core::ports::BookingStore;
use crate::modules::bookings::core::slots::available_slots;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

pub struct AvailabilityQueries<TStore>
where
    TStore: BookingStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    policy: Arc<BookingPolicy>,
}

impl<TStore> AvailabilityQueries<TStore>
where
    TStore: BookingStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, policy: Arc<BookingPolicy>) -> Self {
        Self { store, policy }
    }

    /// Starts on `date` that a session of `duration` could be booked at, as of `now`
    /// (local business time).
    pub async fn available_slots(
        &self,
        date: NaiveDate,
        duration: SessionLength,
        now: NaiveDateTime,
    ) -> Result<Vec<TimeOfDay>, ApplicationError> {
        self.policy
            .check_session_length(duration)
            .map_err(|e| ApplicationError::Domain(e.to_string()))?;
        let reservations = self.store.list_reservations().await?;
        Ok(
            available_slots(&reservations, date, duration, &self.policy.calendar)
                .into_iter()
                .filter(|start| self.policy.check_slot(date, *start, duration, now).is_ok())
                .collect(),
        )
    }

    pub async fn is_available(
        &self,
        date: NaiveDate,
        start_time: TimeOfDay,
        duration: SessionLength,
        exclude_id: Option<&str>,
    ) -> Result<bool, ApplicationError> {
        let reservations = self.store.list_reservations().await?;
        Ok(is_available(
            &reservations,
            date,
            start_time,
            duration,
            exclude_id,
        ))
    }
}
