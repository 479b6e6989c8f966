// Overlap checker: is [date, start, start + length) free?
//
// Purpose
// - Provide the single half-open interval test every storage backend shares.
//
// Responsibilities
// - Ignore reservations on other dates, non-blocking statuses and the excluded id.
// - Treat back-to-back sessions as compatible; the boundary minute is shareable.
//
// Boundaries
// - Pure functions over a caller-supplied snapshot. No input or output, no locks.

use crate::modules::bookings::core::reservation::Reservation;
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::NaiveDate;

/// Half-open interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteSpan {
    pub start: u32,
    pub end: u32,
}

impl MinuteSpan {
    pub fn starting_at(start: TimeOfDay, length: SessionLength) -> Self {
        Self {
            start: start.minutes(),
            end: start.minutes() + length.minutes(),
        }
    }

    pub fn overlaps(&self, other: &MinuteSpan) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// First live reservation that collides with the requested slot, if any.
pub fn first_conflict<'a>(
    reservations: &'a [Reservation],
    date: NaiveDate,
    start_time: TimeOfDay,
    duration: SessionLength,
    exclude_id: Option<&str>,
) -> Option<&'a Reservation> {
    let requested = MinuteSpan::starting_at(start_time, duration);
    reservations.iter().find(|existing| {
        existing.date == date
            && existing.status.blocks_slot()
            && exclude_id != Some(existing.id.as_str())
            && requested.overlaps(&existing.span())
    })
}

pub fn is_available(
    reservations: &[Reservation],
    date: NaiveDate,
    start_time: TimeOfDay,
    duration: SessionLength,
    exclude_id: Option<&str>,
) -> bool {
    first_conflict(reservations, date, start_time, duration, exclude_id).is_none()
}
