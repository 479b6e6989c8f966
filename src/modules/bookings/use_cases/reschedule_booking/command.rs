use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduleBooking {
    pub booking_id: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub duration: SessionLength,
    pub requested_at: NaiveDateTime,
    pub changed_at: DateTime<Utc>,
}
