use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::bookings::use_cases::check_availability::inbound::http as availability_http;
use crate::modules::bookings::use_cases::delete_booking::inbound::http as delete_http;
use crate::modules::bookings::use_cases::list_bookings::inbound::http as list_http;
use crate::modules::bookings::use_cases::list_packages::inbound::http as packages_http;
use crate::modules::bookings::use_cases::reschedule_booking::inbound::http as reschedule_http;
use crate::modules::bookings::use_cases::submit_booking::inbound::http as submit_http;
use crate::modules::bookings::use_cases::update_booking_status::inbound::http as status_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/availability",
            get(availability_http::list_slots).post(availability_http::check_slot),
        )
        .route(
            "/bookings",
            post(submit_http::handle).get(list_http::by_contact),
        )
        .route("/bookings/{id}", get(list_http::by_id))
        .route("/bookings/{id}/schedule", patch(reschedule_http::handle))
        .route(
            "/admin/bookings",
            get(list_http::admin_list)
                .patch(status_http::handle)
                .delete(delete_http::handle),
        )
        .route("/packages", get(packages_http::handle))
        .with_state(state)
}
