use crate::modules::bookings::core::booking::{
    Booking, ContactDetails, PaymentMethod, PaymentStatus,
};
use crate::modules::bookings::core::reservation::ReservationStatus;
use crate::tests::fixtures::reservations::{date, hours, time};
use chrono::{DateTime, TimeZone, Utc};

pub fn fixed_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 20, 8, 0, 0).unwrap()
}

pub fn sample_contact() -> ContactDetails {
    ContactDetails {
        name: "Sam Player".to_string(),
        email: "sam@example.com".to_string(),
        phone: "07123456789".to_string(),
    }
}

/// Pending two-adult booking, revision 1.
pub fn make_booking(id: &str, on: &str, start: &str, length: f64) -> Booking {
    Booking {
        id: id.to_string(),
        date: date(on),
        start_time: time(start),
        duration: hours(length),
        status: ReservationStatus::Pending,
        adults: 2,
        children: 0,
        contact: sample_contact(),
        special_requests: None,
        package_id: None,
        total_price_pence: 0,
        payment_method: PaymentMethod::Stripe,
        payment_status: PaymentStatus::Pending,
        created_at: fixed_created_at(),
        updated_at: fixed_created_at(),
        revision: 1,
    }
}

pub fn with_status(mut booking: Booking, status: ReservationStatus) -> Booking {
    booking.status = status;
    booking
}
