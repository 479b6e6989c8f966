// Booking is the full record a customer submits and the store persists.
//
// Purpose
// - Hold contact details, party make-up, price and payment bookkeeping next to the slot.
//
// Responsibilities
// - Project down to a Reservation for the availability engine.
// - Apply status and schedule changes, bumping `revision` and `updated_at`.
//
// Notes
// - Prices are whole pence. Payment status is recorded, never driven, from here.

use crate::modules::bookings::core::reservation::{Reservation, ReservationStatus};
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Stripe,
    Usdc,
    /// Paid at the venue.
    Cash,
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    #[serde(rename = "duration_hours")]
    pub duration: SessionLength,
    pub status: ReservationStatus,
    pub adults: u32,
    pub children: u32,
    pub contact: ContactDetails,
    pub special_requests: Option<String>,
    pub package_id: Option<String>,
    pub total_price_pence: u64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub revision: u32,
}

impl Booking {
    pub fn reservation(&self) -> Reservation {
        Reservation::from(self)
    }

    pub fn apply_status(&mut self, status: ReservationStatus, at: DateTime<Utc>) {
        self.status = status;
        self.touch(at);
    }

    pub fn apply_schedule(
        &mut self,
        date: NaiveDate,
        start_time: TimeOfDay,
        duration: SessionLength,
        at: DateTime<Utc>,
    ) {
        self.date = date;
        self.start_time = start_time;
        self.duration = duration;
        self.touch(at);
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
        self.revision += 1;
    }
}

impl From<&Booking> for Reservation {
    fn from(booking: &Booking) -> Self {
        Reservation {
            id: booking.id.clone(),
            date: booking.date,
            start_time: booking.start_time,
            duration: booking.duration,
            status: booking.status,
        }
    }
}

#[cfg(test)]
mod booking_tests {
    use super::*;
    use crate::tests::fixtures::bookings::make_booking;
    use crate::tests::fixtures::reservations::{date, hours, time};
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_should_project_to_a_reservation() {
        let booking = make_booking("bk-1", "2025-03-01", "14:00", 2.0);
        let reservation = booking.reservation();
        assert_eq!(reservation.id, "bk-1");
        assert_eq!(reservation.date, date("2025-03-01"));
        assert_eq!(reservation.start_time, time("14:00"));
        assert_eq!(reservation.duration, hours(2.0));
        assert_eq!(reservation.status, ReservationStatus::Pending);
    }

    #[rstest]
    fn it_should_bump_the_revision_on_every_change() {
        let mut booking = make_booking("bk-1", "2025-03-01", "14:00", 2.0);
        let later = Utc.with_ymd_and_hms(2025, 2, 20, 9, 0, 0).unwrap();
        booking.apply_status(ReservationStatus::Confirmed, later);
        assert_eq!(booking.revision, 2);
        assert_eq!(booking.updated_at, later);
        booking.apply_schedule(date("2025-03-02"), time("16:00"), hours(1.5), later);
        assert_eq!(booking.revision, 3);
        assert_eq!(booking.date, date("2025-03-02"));
        assert_eq!(booking.start_time, time("16:00"));
        assert_eq!(booking.duration, hours(1.5));
        assert_eq!(booking.created_at, make_booking("bk-1", "2025-03-01", "14:00", 2.0).created_at);
    }

    #[rstest]
    fn it_should_serialize_with_wire_formats() {
        let booking = make_booking("bk-1", "2025-03-01", "14:00", 2.5);
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["date"], "2025-03-01");
        assert_eq!(json["start_time"], "14:00");
        assert_eq!(json["duration_hours"], 2.5);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["payment_method"], "stripe");
    }
}
