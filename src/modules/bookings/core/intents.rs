// Side effects a booking decision asks the outside world to perform.
//
// Notes
// - Email and payment collaborators consume these from the domain outbox.

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::reservation::ReservationStatus;
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BookingIntent {
    BookingSubmitted {
        booking: Booking,
    },
    BookingStatusChanged {
        booking_id: String,
        from: ReservationStatus,
        to: ReservationStatus,
    },
    BookingRescheduled {
        booking_id: String,
        date: NaiveDate,
        start_time: TimeOfDay,
        #[serde(rename = "duration_hours")]
        duration: SessionLength,
    },
    BookingDeleted {
        booking_id: String,
    },
}

impl BookingIntent {
    pub fn name(&self) -> &'static str {
        match self {
            BookingIntent::BookingSubmitted { .. } => "BookingSubmitted",
            BookingIntent::BookingStatusChanged { .. } => "BookingStatusChanged",
            BookingIntent::BookingRescheduled { .. } => "BookingRescheduled",
            BookingIntent::BookingDeleted { .. } => "BookingDeleted",
        }
    }
}
