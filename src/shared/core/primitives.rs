// Boundary primitives for business dates, times of day and session lengths.
//
// Purpose
// - Turn the wire formats (YYYY-MM-DD, HH:MM, decimal hours) into checked types.
//
// Responsibilities
// - Reject malformed input instead of normalizing it.
// - Keep all time arithmetic in whole minutes since midnight.
//
// Boundaries
// - No input or output. Dates carry no timezone; they are local business dates.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("invalid duration '{0}', expected a positive number of hours")]
    InvalidDuration(String),
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, PrimitiveError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| PrimitiveError::InvalidDate(raw.to_string()))
}

/// Minute of the day, `00:00` to `23:59`. Closing times may also be `24:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight at the end of the day. Only valid as a closing time.
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY as u16);

    pub const fn at(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "time of day out of range");
        Self(hour * 60 + minute)
    }

    pub fn from_minutes(minutes: u32) -> Result<Self, PrimitiveError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(PrimitiveError::InvalidTime(format!("{minutes} minutes")));
        }
        Ok(Self(minutes as u16))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, PrimitiveError> {
        if minute >= 60 {
            return Err(PrimitiveError::InvalidTime(format!("{hour}:{minute}")));
        }
        Self::from_minutes(hour * 60 + minute)
    }

    pub fn parse(raw: &str) -> Result<Self, PrimitiveError> {
        let time = NaiveTime::parse_from_str(raw, "%H:%M")
            .map_err(|_| PrimitiveError::InvalidTime(raw.to_string()))?;
        Self::from_minutes(time.hour() * 60 + time.minute())
    }

    /// Like `parse`, but also accepts `24:00`.
    pub fn parse_closing(raw: &str) -> Result<Self, PrimitiveError> {
        if raw == "24:00" {
            return Ok(Self::END_OF_DAY);
        }
        Self::parse(raw)
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::MIN + chrono::Duration::minutes(i64::from(self.0))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = PrimitiveError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// Length of a session in whole minutes. Serialized as decimal hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SessionLength {
    minutes: u32,
}

impl SessionLength {
    pub const fn of_minutes(minutes: u32) -> Self {
        assert!(minutes > 0 && minutes <= MINUTES_PER_DAY, "session length out of range");
        Self { minutes }
    }

    pub fn from_hours(hours: f64) -> Result<Self, PrimitiveError> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(PrimitiveError::InvalidDuration(hours.to_string()));
        }
        let minutes = hours * 60.0;
        let whole = minutes.round();
        if (minutes - whole).abs() > 1e-6 || whole > f64::from(MINUTES_PER_DAY) {
            return Err(PrimitiveError::InvalidDuration(hours.to_string()));
        }
        Ok(Self {
            minutes: whole as u32,
        })
    }

    pub fn from_minutes(minutes: u32) -> Result<Self, PrimitiveError> {
        if minutes == 0 || minutes > MINUTES_PER_DAY {
            return Err(PrimitiveError::InvalidDuration(format!("{minutes} minutes")));
        }
        Ok(Self { minutes })
    }

    pub fn minutes(self) -> u32 {
        self.minutes
    }

    pub fn hours(self) -> f64 {
        f64::from(self.minutes) / 60.0
    }

    pub fn is_half_hour_multiple(self) -> bool {
        self.minutes % 30 == 0
    }
}

impl fmt::Display for SessionLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

impl TryFrom<f64> for SessionLength {
    type Error = PrimitiveError;

    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::from_hours(hours)
    }
}

impl From<SessionLength> for f64 {
    fn from(length: SessionLength) -> Self {
        length.hours()
    }
}
