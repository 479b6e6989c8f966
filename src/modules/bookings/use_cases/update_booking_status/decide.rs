use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::use_cases::decision::{DecideError, Decision};
use crate::modules::bookings::use_cases::update_booking_status::command::UpdateBookingStatus;

/// Apply an explicit status transition. Terminal statuses never reopen, so a
/// status change can free a slot but never occupy one.
pub fn decide_status(current: &Booking, command: UpdateBookingStatus) -> Decision {
    if !current.status.can_transition_to(command.status) {
        return Decision::Rejected {
            reason: DecideError::InvalidTransition {
                from: current.status,
                to: command.status,
            },
        };
    }
    let mut booking = current.clone();
    booking.apply_status(command.status, command.changed_at);
    Decision::Accepted {
        intents: vec![BookingIntent::BookingStatusChanged {
            booking_id: booking.id.clone(),
            from: current.status,
            to: command.status,
        }],
        booking,
    }
}
