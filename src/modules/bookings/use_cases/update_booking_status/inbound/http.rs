use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::reservation::ReservationStatus;
use crate::modules::bookings::use_cases::update_booking_status::command::UpdateBookingStatus;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateBookingStatusBody {
    pub booking_id: String,
    pub status: ReservationStatus,
}

#[derive(Serialize)]
pub struct UpdateBookingStatusResponse {
    pub booking: Booking,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateBookingStatusBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateBookingStatus {
        booking_id: body.booking_id,
        status: body.status,
        changed_at: Utc::now(),
    };

    match state.status_handler.handle(command).await {
        Ok(booking) => Json(UpdateBookingStatusResponse { booking }).into_response(),
        Err(e) => e.into_response(),
    }
}
