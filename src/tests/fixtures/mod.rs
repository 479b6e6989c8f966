pub mod bookings;
pub mod commands;
pub mod reservations;
pub mod state;
