pub mod submit_booking;
