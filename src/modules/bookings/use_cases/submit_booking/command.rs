use crate::modules::bookings::core::booking::{ContactDetails, PaymentMethod};
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitBooking {
    pub booking_id: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub duration: SessionLength,
    pub adults: u32,
    pub children: u32,
    pub contact: ContactDetails,
    pub special_requests: Option<String>,
    pub package_id: Option<String>,
    pub payment_method: PaymentMethod,
    /// Wall clock at the venue, used for notice and advance limits.
    pub requested_at: NaiveDateTime,
    pub submitted_at: DateTime<Utc>,
}
