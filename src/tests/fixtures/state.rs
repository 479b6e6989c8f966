use crate::modules::bookings::adapters::outbound::booking_store_in_memory::InMemoryBookingStore;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::policy::BookingPolicy;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_state_with_store(store: InMemoryBookingStore) -> AppState {
    AppState::build(
        Arc::new(store),
        Arc::new(InMemoryDomainOutbox::new()),
        BookingPolicy::default(),
    )
}

pub fn make_state_with_bookings(bookings: Vec<Booking>) -> AppState {
    make_state_with_store(InMemoryBookingStore::with_bookings(bookings))
}

pub fn make_test_state() -> AppState {
    make_state_with_store(InMemoryBookingStore::new())
}
