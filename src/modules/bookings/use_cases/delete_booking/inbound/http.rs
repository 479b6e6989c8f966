use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::bookings::use_cases::errors::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteBookingParams {
    pub booking_id: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteBookingResponse {
    pub deleted: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DeleteBookingParams>,
) -> impl IntoResponse {
    let Some(booking_id) = params.booking_id.filter(|id| !id.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "booking_id is required");
    };
    match state.delete_handler.handle(&booking_id, Utc::now()).await {
        Ok(removed) => Json(DeleteBookingResponse {
            deleted: removed.id,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
