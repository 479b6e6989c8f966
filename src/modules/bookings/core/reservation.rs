// Reservation is the unit the availability engine reasons about.
//
// Purpose
// - Carry just enough of a booking to answer conflict queries: id, date, start, length, status.
//
// Responsibilities
// - Decide which statuses block a slot.
// - Encode the explicit status transitions a booking may go through.
//
// Boundaries
// - Storage adapters map their own row shapes into this type before calling the engine.

use crate::modules::bookings::core::overlap::MinuteSpan;
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Only live reservations hold on to their slot.
    pub fn blocks_slot(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled) | (Confirmed, Completed)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    #[serde(rename = "duration_hours")]
    pub duration: SessionLength,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn span(&self) -> MinuteSpan {
        MinuteSpan::starting_at(self.start_time, self.duration)
    }
}
