use crate::modules::bookings::core::reservation::ReservationStatus;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookingStatus {
    pub booking_id: String,
    pub status: ReservationStatus,
    pub changed_at: DateTime<Utc>,
}
