// Configuration loaded from environment variables, with defaults for a local run.
//
// Notes
// - `main` loads `.env` through dotenvy before calling `Config::from_env`.
// - Parsing goes through a lookup function so tests never touch the process environment.

use crate::modules::bookings::core::calendar::{BusinessCalendar, CalendarError, parse_weekdays};
use crate::modules::bookings::core::packages::PackageCatalog;
use crate::modules::bookings::core::policy::BookingPolicy;
use crate::shared::core::primitives::{PrimitiveError, SessionLength, TimeOfDay};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}: {source}")]
    Primitive {
        key: &'static str,
        source: PrimitiveError,
    },

    #[error("{key}: {source}")]
    Calendar {
        key: &'static str,
        source: CalendarError,
    },

    #[error("{key}: cannot parse '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub data_file: PathBuf,
    pub policy: BookingPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("BOOKINGS_HOST", "0.0.0.0");
        let port = number("BOOKINGS_PORT", var("BOOKINGS_PORT", "8080"))?;
        let store = match var("BOOKINGS_STORE", "file").to_ascii_lowercase().as_str() {
            "file" => StoreBackend::File,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    key: "BOOKINGS_STORE",
                    value: other.to_string(),
                });
            }
        };
        let data_file = PathBuf::from(var("BOOKINGS_DATA_FILE", "./data/bookings.json"));

        let open_time = time_of_day("BOOKINGS_OPEN_TIME", var("BOOKINGS_OPEN_TIME", "12:00"))?;
        let close_raw = var("BOOKINGS_CLOSE_TIME", "22:00");
        let close_time = TimeOfDay::parse_closing(close_raw.trim()).map_err(|source| {
            ConfigError::Primitive {
                key: "BOOKINGS_CLOSE_TIME",
                source,
            }
        })?;
        let open_days = parse_weekdays(&var("BOOKINGS_OPEN_DAYS", "mon,tue,wed,thu,fri,sat,sun"))
            .map_err(|source| ConfigError::Calendar {
                key: "BOOKINGS_OPEN_DAYS",
                source,
            })?;
        let step = number("BOOKINGS_SLOT_STEP_MINUTES", var("BOOKINGS_SLOT_STEP_MINUTES", "30"))?;
        let last_start = match lookup("BOOKINGS_LAST_START") {
            Some(raw) => time_of_day("BOOKINGS_LAST_START", raw)?,
            None => hour_before_close(open_time, close_time),
        };
        let calendar = BusinessCalendar::with_grid(open_time, close_time, open_days, step, Some(last_start))
            .map_err(|source| ConfigError::Calendar {
                key: match source {
                    CalendarError::InvertedHours { .. } => "BOOKINGS_CLOSE_TIME",
                    CalendarError::CandidateOutsideHours(_) => "BOOKINGS_LAST_START",
                    _ => "BOOKINGS_SLOT_STEP_MINUTES",
                },
                source,
            })?;

        let party = hours("BOOKINGS_PARTY_DURATION_HOURS", var("BOOKINGS_PARTY_DURATION_HOURS", "2.5"))?;
        let policy = BookingPolicy {
            calendar,
            catalog: PackageCatalog::standard(party),
            min_notice_hours: number("BOOKINGS_MIN_NOTICE_HOURS", var("BOOKINGS_MIN_NOTICE_HOURS", "2"))?,
            max_advance_days: number("BOOKINGS_MAX_ADVANCE_DAYS", var("BOOKINGS_MAX_ADVANCE_DAYS", "30"))?,
            max_session: hours("BOOKINGS_MAX_SESSION_HOURS", var("BOOKINGS_MAX_SESSION_HOURS", "6"))?,
        };

        Ok(Self {
            host,
            port,
            store,
            data_file,
            policy,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn number<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn time_of_day(key: &'static str, value: String) -> Result<TimeOfDay, ConfigError> {
    TimeOfDay::parse(value.trim()).map_err(|source| ConfigError::Primitive { key, source })
}

/// Last start when none is configured: an hour before closing, never before opening.
fn hour_before_close(open: TimeOfDay, close: TimeOfDay) -> TimeOfDay {
    TimeOfDay::from_minutes(close.minutes().saturating_sub(60))
        .map_or(open, |last| last.max(open))
}

fn hours(key: &'static str, value: String) -> Result<SessionLength, ConfigError> {
    let parsed: f64 = number(key, value)?;
    SessionLength::from_hours(parsed).map_err(|source| ConfigError::Primitive { key, source })
}
