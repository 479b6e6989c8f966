use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::contact::ContactError;
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::policy::PolicyError;
use crate::modules::bookings::core::reservation::ReservationStatus;
use crate::shared::core::primitives::SessionLength;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("at least one guest is required")]
    NoGuests,

    #[error("guest count out of range ({adults} adults, {children} children)")]
    GuestCountOutOfRange { adults: u32, children: u32 },

    #[error("unknown party package '{0}'")]
    UnknownPackage(String),

    #[error("this package allows at most {max} guests")]
    TooManyGuests { max: u32 },

    #[error("this package books a {expected} session")]
    PackageDuration { expected: SessionLength },

    #[error("time slot is no longer available")]
    SlotTaken { conflicting_id: String },

    #[error("cannot move a booking from {from} to {to}")]
    InvalidTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },

    #[error("a {0} booking cannot be rescheduled")]
    NotReschedulable(ReservationStatus),
}

pub enum Decision {
    Accepted {
        booking: Booking,
        intents: Vec<BookingIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
