use crate::modules::bookings::core::policy::BookingPolicy;
use crate::modules::bookings::core::ports::BookingStore;
use crate::modules::bookings::use_cases::check_availability::handler::AvailabilityQueries;
use crate::modules::bookings::use_cases::delete_booking::handler::DeleteBookingHandler;
use crate::modules::bookings::use_cases::list_bookings::handler::BookingQueries;
use crate::modules::bookings::use_cases::reschedule_booking::handler::RescheduleBookingHandler;
use crate::modules::bookings::use_cases::slot_write_lock::SlotWriteLock;
use crate::modules::bookings::use_cases::submit_booking::handler::SubmitBookingHandler;
use crate::modules::bookings::use_cases::update_booking_status::handler::UpdateBookingStatusHandler;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub const BOOKINGS_TOPIC: &str = "bookings";

type Store = dyn BookingStore;
type Outbox = dyn DomainOutbox;

#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<BookingPolicy>,
    pub availability: Arc<AvailabilityQueries<Store>>,
    pub bookings: Arc<BookingQueries<Store>>,
    pub submit_handler: Arc<SubmitBookingHandler<Store, Outbox>>,
    pub status_handler: Arc<UpdateBookingStatusHandler<Store, Outbox>>,
    pub reschedule_handler: Arc<RescheduleBookingHandler<Store, Outbox>>,
    pub delete_handler: Arc<DeleteBookingHandler<Store, Outbox>>,
}

impl AppState {
    /// Wire every handler to one store, one outbox and one slot lock.
    pub fn build(store: Arc<Store>, outbox: Arc<Outbox>, policy: BookingPolicy) -> Self {
        let policy = Arc::new(policy);
        let slot_lock = SlotWriteLock::new();
        Self {
            availability: Arc::new(AvailabilityQueries::new(store.clone(), policy.clone())),
            bookings: Arc::new(BookingQueries::new(store.clone())),
            submit_handler: Arc::new(SubmitBookingHandler::new(
                BOOKINGS_TOPIC,
                store.clone(),
                outbox.clone(),
                policy.clone(),
                slot_lock.clone(),
            )),
            status_handler: Arc::new(UpdateBookingStatusHandler::new(
                BOOKINGS_TOPIC,
                store.clone(),
                outbox.clone(),
            )),
            reschedule_handler: Arc::new(RescheduleBookingHandler::new(
                BOOKINGS_TOPIC,
                store.clone(),
                outbox.clone(),
                policy.clone(),
                slot_lock,
            )),
            delete_handler: Arc::new(DeleteBookingHandler::new(BOOKINGS_TOPIC, store, outbox)),
            policy,
        }
    }
}
