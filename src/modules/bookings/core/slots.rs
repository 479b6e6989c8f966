// Slot generator: which grid start times can still take a session of this length?
//
// Purpose
// - Enumerate candidate starts from the business calendar, in grid order, and keep the free ones.
//
// Responsibilities
// - Return nothing on closed weekdays.
// - Drop candidates that would run past closing time.
// - Filter the rest through the slot index built from the same snapshot.
//
// Boundaries
// - Recomputed on every call; nothing is cached between calls.

use crate::modules::bookings::core::calendar::BusinessCalendar;
use crate::modules::bookings::core::overlap::MinuteSpan;
use crate::modules::bookings::core::reservation::Reservation;
use crate::modules::bookings::core::slot_index::SlotIndex;
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::NaiveDate;

pub fn available_slots(
    reservations: &[Reservation],
    date: NaiveDate,
    duration: SessionLength,
    calendar: &BusinessCalendar,
) -> Vec<TimeOfDay> {
    if !calendar.is_open_on(date) {
        return Vec::new();
    }
    let index = SlotIndex::build(reservations.iter().filter(|r| r.date == date));
    calendar
        .candidate_start_times
        .iter()
        .copied()
        .filter(|start| calendar.fits_before_close(*start, duration))
        .filter(|start| index.is_free(date, MinuteSpan::starting_at(*start, duration), None))
        .collect()
}
