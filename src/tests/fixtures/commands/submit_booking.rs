// Builder for SubmitBooking commands with a fixed, bookable default:
// two adults, Saturday 2025-03-01 at 14:00 for two hours, requested days ahead.

use crate::modules::bookings::core::booking::PaymentMethod;
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use crate::tests::fixtures::bookings::{fixed_created_at, sample_contact};
use crate::tests::fixtures::reservations::{date, hours, time};
use chrono::NaiveDateTime;

pub fn fixed_requested_at() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-02-25 10:00", "%Y-%m-%d %H:%M").unwrap()
}

pub struct SubmitBookingBuilder {
    inner: SubmitBooking,
}

impl Default for SubmitBookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitBookingBuilder {
    pub fn new() -> Self {
        Self {
            inner: SubmitBooking {
                booking_id: "bk-fixed-0001".to_string(),
                date: date("2025-03-01"),
                start_time: time("14:00"),
                duration: hours(2.0),
                adults: 2,
                children: 0,
                contact: sample_contact(),
                special_requests: None,
                package_id: None,
                payment_method: PaymentMethod::Stripe,
                requested_at: fixed_requested_at(),
                submitted_at: fixed_created_at(),
            },
        }
    }

    pub fn booking_id(mut self, v: impl Into<String>) -> Self {
        self.inner.booking_id = v.into();
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = date(v);
        self
    }

    pub fn start_time(mut self, v: &str) -> Self {
        self.inner.start_time = time(v);
        self
    }

    pub fn duration(mut self, v: f64) -> Self {
        self.inner.duration = hours(v);
        self
    }

    pub fn guests(mut self, adults: u32, children: u32) -> Self {
        self.inner.adults = adults;
        self.inner.children = children;
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.contact.email = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.contact.phone = v.into();
        self
    }

    pub fn package(mut self, v: impl Into<String>) -> Self {
        self.inner.package_id = Some(v.into());
        self
    }

    pub fn special_requests(mut self, v: impl Into<String>) -> Self {
        self.inner.special_requests = Some(v.into());
        self
    }

    pub fn requested_at(mut self, v: NaiveDateTime) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> SubmitBooking {
        self.inner
    }
}

#[cfg(test)]
mod submit_booking_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_a_bookable_afternoon_session() {
        let built = SubmitBookingBuilder::default().build();
        assert_eq!(built.booking_id, "bk-fixed-0001");
        assert_eq!(built.date, date("2025-03-01"));
        assert_eq!(built.start_time, time("14:00"));
        assert_eq!(built.duration, hours(2.0));
        assert_eq!(built.contact, sample_contact());
        assert_eq!(built.package_id, None);
    }

    #[rstest]
    fn it_should_override_fields() {
        let built = SubmitBookingBuilder::new()
            .booking_id("bk-9")
            .date("2025-03-02")
            .start_time("18:30")
            .duration(2.5)
            .guests(3, 4)
            .package("gold")
            .phone("+447123456789")
            .build();
        assert_eq!(built.booking_id, "bk-9");
        assert_eq!(built.date, date("2025-03-02"));
        assert_eq!(built.start_time, time("18:30"));
        assert_eq!(built.duration, hours(2.5));
        assert_eq!((built.adults, built.children), (3, 4));
        assert_eq!(built.package_id.as_deref(), Some("gold"));
        assert_eq!(built.contact.phone, "+447123456789");
    }
}
