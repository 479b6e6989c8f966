// Booking policy: the rules a slot must satisfy before the conflict check runs.
//
// Purpose
// - Bundle the business calendar, package catalog and booking limits in one value.
//
// Responsibilities
// - Reject closed days, off-grid starts, sessions past closing, unsupported lengths,
//   too little notice and dates too far ahead.
//
// Boundaries
// - "Now" is passed in as a local business date-time; nothing here reads a clock.

use crate::modules::bookings::core::calendar::BusinessCalendar;
use crate::modules::bookings::core::packages::PackageCatalog;
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

pub const DEFAULT_MIN_NOTICE_HOURS: u32 = 2;
pub const DEFAULT_MAX_ADVANCE_DAYS: u32 = 30;
pub const DEFAULT_MAX_SESSION: SessionLength = SessionLength::of_minutes(6 * 60);
pub const DEFAULT_PARTY_SESSION: SessionLength = SessionLength::of_minutes(150);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("the venue is closed on {0}")]
    ClosedDay(NaiveDate),

    #[error("{0} is not an offered start time")]
    OffGrid(TimeOfDay),

    #[error("a {duration} session starting at {start} would run past closing time")]
    PastClosing {
        start: TimeOfDay,
        duration: SessionLength,
    },

    #[error("session length {duration} must be whole half hours, at most {max}")]
    UnsupportedDuration {
        duration: SessionLength,
        max: SessionLength,
    },

    #[error("bookings need at least {0} hours notice")]
    TooShortNotice(u32),

    #[error("bookings can be made at most {0} days in advance")]
    TooFarAhead(u32),
}

#[derive(Debug, Clone)]
pub struct BookingPolicy {
    pub calendar: BusinessCalendar,
    pub catalog: PackageCatalog,
    pub min_notice_hours: u32,
    pub max_advance_days: u32,
    pub max_session: SessionLength,
}

impl BookingPolicy {
    pub fn check_session_length(&self, duration: SessionLength) -> Result<(), PolicyError> {
        if !duration.is_half_hour_multiple() || duration > self.max_session {
            return Err(PolicyError::UnsupportedDuration {
                duration,
                max: self.max_session,
            });
        }
        Ok(())
    }

    pub fn check_slot(
        &self,
        date: NaiveDate,
        start_time: TimeOfDay,
        duration: SessionLength,
        now: NaiveDateTime,
    ) -> Result<(), PolicyError> {
        if !self.calendar.is_open_on(date) {
            return Err(PolicyError::ClosedDay(date));
        }
        if !self.calendar.is_candidate(start_time) {
            return Err(PolicyError::OffGrid(start_time));
        }
        if !self.calendar.fits_before_close(start_time, duration) {
            return Err(PolicyError::PastClosing {
                start: start_time,
                duration,
            });
        }
        let starts_at = date.and_time(start_time.to_naive_time());
        if starts_at < now + Duration::hours(i64::from(self.min_notice_hours)) {
            return Err(PolicyError::TooShortNotice(self.min_notice_hours));
        }
        if date > now.date() + Duration::days(i64::from(self.max_advance_days)) {
            return Err(PolicyError::TooFarAhead(self.max_advance_days));
        }
        Ok(())
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            calendar: BusinessCalendar::default(),
            catalog: PackageCatalog::standard(DEFAULT_PARTY_SESSION),
            min_notice_hours: DEFAULT_MIN_NOTICE_HOURS,
            max_advance_days: DEFAULT_MAX_ADVANCE_DAYS,
            max_session: DEFAULT_MAX_SESSION,
        }
    }
}
