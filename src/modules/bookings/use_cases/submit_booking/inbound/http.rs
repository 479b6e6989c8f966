use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::bookings::core::booking::{Booking, ContactDetails, PaymentMethod};
use crate::modules::bookings::use_cases::errors::error_response;
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use crate::shared::core::primitives::{PrimitiveError, SessionLength, TimeOfDay, parse_date};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitBookingBody {
    pub date: String,
    pub start_time: String,
    pub duration_hours: f64,
    #[serde(default)]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub special_requests: Option<String>,
    pub package_id: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Serialize)]
pub struct SubmitBookingResponse {
    pub booking: Booking,
}

impl SubmitBookingBody {
    fn into_command(self) -> Result<SubmitBooking, PrimitiveError> {
        Ok(SubmitBooking {
            booking_id: Uuid::now_v7().to_string(),
            date: parse_date(&self.date)?,
            start_time: TimeOfDay::parse(&self.start_time)?,
            duration: SessionLength::from_hours(self.duration_hours)?,
            adults: self.adults,
            children: self.children,
            contact: ContactDetails {
                name: self.contact_name,
                email: self.contact_email,
                phone: self.contact_phone,
            },
            special_requests: self.special_requests,
            package_id: self.package_id,
            payment_method: self.payment_method.unwrap_or(PaymentMethod::Stripe),
            requested_at: Local::now().naive_local(),
            submitted_at: Utc::now(),
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitBookingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match body.into_command() {
        Ok(command) => command,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.submit_handler.handle(command).await {
        Ok(booking) => (
            StatusCode::CREATED,
            Json(SubmitBookingResponse { booking }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
