// Terse constructors for dates, times, lengths and reservations used across tests.

use crate::modules::bookings::core::reservation::{Reservation, ReservationStatus};
use crate::shared::core::primitives::{SessionLength, TimeOfDay, parse_date};
use chrono::{Duration, Local, NaiveDate};

pub fn date(raw: &str) -> NaiveDate {
    parse_date(raw).unwrap()
}

pub fn time(raw: &str) -> TimeOfDay {
    TimeOfDay::parse(raw).unwrap()
}

pub fn hours(value: f64) -> SessionLength {
    SessionLength::from_hours(value).unwrap()
}

pub fn reservation(
    id: &str,
    on: &str,
    start: &str,
    length: f64,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id: id.to_string(),
        date: date(on),
        start_time: time(start),
        duration: hours(length),
        status,
    }
}

/// `YYYY-MM-DD` for the local business date `days` from today.
pub fn date_in_days(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
