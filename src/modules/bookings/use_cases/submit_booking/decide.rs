// Decide whether a submitted booking is accepted.
//
// Order of checks: contact details, party size and package, session length,
// calendar and booking limits, then the overlap check against the snapshot.
// Only the last one produces SlotTaken.

use crate::modules::bookings::core::booking::{Booking, PaymentStatus};
use crate::modules::bookings::core::contact::validate_contact;
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::overlap::first_conflict;
use crate::modules::bookings::core::policy::BookingPolicy;
use crate::modules::bookings::core::pricing::{package_price_pence, session_price_pence};
use crate::modules::bookings::core::reservation::{Reservation, ReservationStatus};
use crate::modules::bookings::use_cases::decision::{DecideError, Decision};
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;

pub fn decide_submit(
    policy: &BookingPolicy,
    reservations: &[Reservation],
    command: SubmitBooking,
) -> Decision {
    match check(policy, reservations, &command) {
        Ok(total_price_pence) => {
            let booking = Booking {
                id: command.booking_id,
                date: command.date,
                start_time: command.start_time,
                duration: command.duration,
                status: ReservationStatus::Pending,
                adults: command.adults,
                children: command.children,
                contact: command.contact,
                special_requests: command
                    .special_requests
                    .filter(|text| !text.trim().is_empty()),
                package_id: command.package_id,
                total_price_pence,
                payment_method: command.payment_method,
                payment_status: PaymentStatus::Pending,
                created_at: command.submitted_at,
                updated_at: command.submitted_at,
                revision: 1,
            };
            Decision::Accepted {
                intents: vec![BookingIntent::BookingSubmitted {
                    booking: booking.clone(),
                }],
                booking,
            }
        }
        Err(reason) => Decision::Rejected { reason },
    }
}

fn check(
    policy: &BookingPolicy,
    reservations: &[Reservation],
    command: &SubmitBooking,
) -> Result<u64, DecideError> {
    validate_contact(&command.contact)?;

    let guests = command.adults.checked_add(command.children).ok_or(
        DecideError::GuestCountOutOfRange {
            adults: command.adults,
            children: command.children,
        },
    )?;
    if guests == 0 {
        return Err(DecideError::NoGuests);
    }

    let price = match command.package_id.as_deref() {
        Some(package_id) => {
            let package = policy
                .catalog
                .find(package_id)
                .ok_or_else(|| DecideError::UnknownPackage(package_id.to_string()))?;
            if guests > package.max_guests {
                return Err(DecideError::TooManyGuests {
                    max: package.max_guests,
                });
            }
            if command.duration != package.duration {
                return Err(DecideError::PackageDuration {
                    expected: package.duration,
                });
            }
            package_price_pence(package, guests)
        }
        None => {
            policy.check_session_length(command.duration)?;
            session_price_pence(command.adults, command.children, command.duration)
        }
    };

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
        None,
    ) {
        return Err(DecideError::SlotTaken {
            conflicting_id: existing.id.clone(),
        });
    }

    Ok(price)
}
