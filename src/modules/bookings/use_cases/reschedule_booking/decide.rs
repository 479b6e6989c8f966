// Decide whether a live booking may move to a new slot.
//
// The booking's own reservation is excluded from the overlap check, so moving
// within (or onto part of) its current slot is allowed.

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::overlap::first_conflict;
use crate::modules::bookings::core::policy::BookingPolicy;
use crate::modules::bookings::core::reservation::Reservation;
use crate::modules::bookings::use_cases::decision::{DecideError, Decision};
use crate::modules::bookings::use_cases::reschedule_booking::command::RescheduleBooking;

pub fn decide_reschedule(
    policy: &BookingPolicy,
    reservations: &[Reservation],
    current: &Booking,
    command: RescheduleBooking,
) -> Decision {
    if let Err(reason) = check(policy, reservations, current, &command) {
        return Decision::Rejected { reason };
    }
    let mut booking = current.clone();
    booking.apply_schedule(
        command.date,
        command.start_time,
        command.duration,
        command.changed_at,
    );
    Decision::Accepted {
        intents: vec![BookingIntent::BookingRescheduled {
            booking_id: booking.id.clone(),
            date: booking.date,
            start_time: booking.start_time,
            duration: booking.duration,
        }],
        booking,
    }
}

fn check(
    policy: &BookingPolicy,
    reservations: &[Reservation],
    current: &Booking,
    command: &RescheduleBooking,
) -> Result<(), DecideError> {
    if !current.status.blocks_slot() {
        return Err(DecideError::NotReschedulable(current.status));
    }
    match current
        .package_id
        .as_deref()
        .and_then(|id| policy.catalog.find(id))
    {
        Some(package) if package.duration != command.duration => {
            return Err(DecideError::PackageDuration {
                expected: package.duration,
            });
        }
        Some(_) => {}
        None => policy.check_session_length(command.duration)?,
    }
    policy.check_slot(
        command.date,
        command.start_time,
        command.duration,
        command.requested_at,
    )?;
    if let Some(existing) = first_conflict(
        reservations,
        command.date,
        command.start_time,
        command.duration,
        Some(current.id.as_str()),
    ) {
        return Err(DecideError::SlotTaken {
            conflicting_id: existing.id.clone(),
        });
    }
    Ok(())
}
