use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::modules::bookings::use_cases::errors::error_response;
use crate::shared::core::primitives::{SessionLength, TimeOfDay, parse_date};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AvailableSlotsParams {
    pub date: Option<String>,
    pub duration: Option<f64>,
}

#[derive(Serialize)]
pub struct AvailableSlotsResponse {
    pub date: String,
    pub duration_hours: f64,
    pub available_slots: Vec<TimeOfDay>,
}

#[derive(Deserialize)]
pub struct SlotCheckBody {
    pub date: String,
    pub start_time: String,
    pub duration_hours: f64,
    pub exclude_id: Option<String>,
}

#[derive(Serialize)]
pub struct SlotCheckResponse {
    pub date: String,
    pub start_time: TimeOfDay,
    pub duration_hours: f64,
    pub is_available: bool,
}

pub async fn list_slots(
    State(state): State<AppState>,
    Query(params): Query<AvailableSlotsParams>,
) -> impl IntoResponse {
    let (Some(raw_date), Some(raw_duration)) = (params.date, params.duration) else {
        return error_response(StatusCode::BAD_REQUEST, "date and duration are required");
    };
    let date = match parse_date(&raw_date) {
        Ok(date) => date,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let duration = match SessionLength::from_hours(raw_duration) {
        Ok(duration) => duration,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state
        .availability
        .available_slots(date, duration, Local::now().naive_local())
        .await
    {
        Ok(available_slots) => Json(AvailableSlotsResponse {
            date: raw_date,
            duration_hours: duration.hours(),
            available_slots,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn check_slot(
    State(state): State<AppState>,
    body: Result<Json<SlotCheckBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let parsed = parse_date(&body.date).and_then(|date| {
        Ok((
            date,
            TimeOfDay::parse(&body.start_time)?,
            SessionLength::from_hours(body.duration_hours)?,
        ))
    });
    let (date, start_time, duration) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state
        .availability
        .is_available(date, start_time, duration, body.exclude_id.as_deref())
        .await
    {
        Ok(is_available) => Json(SlotCheckResponse {
            date: body.date,
            start_time,
            duration_hours: duration.hours(),
            is_available,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
