use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::use_cases::errors::error_response;
use crate::modules::bookings::use_cases::reschedule_booking::command::RescheduleBooking;
use crate::shared::core::primitives::{SessionLength, TimeOfDay, parse_date};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RescheduleBookingBody {
    pub date: String,
    pub start_time: String,
    pub duration_hours: f64,
}

#[derive(Serialize)]
pub struct RescheduleBookingResponse {
    pub booking: Booking,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    body: Result<Json<RescheduleBookingBody>, JsonRejection>,
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

    let command = RescheduleBooking {
        booking_id,
        date,
        start_time,
        duration,
        requested_at: Local::now().naive_local(),
        changed_at: Utc::now(),
    };

    match state.reschedule_handler.handle(command).await {
        Ok(booking) => Json(RescheduleBookingResponse { booking }).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod reschedule_booking_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::patch,
    };
    use chrono::{Duration, Local};
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::bookings::make_booking;
    use crate::tests::fixtures::state::make_state_with_bookings;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/bookings/{id}/schedule", patch(handle))
            .with_state(state)
    }

    fn day_after_tomorrow() -> String {
        (Local::now().date_naive() + Duration::days(2))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn seeded() -> AppState {
        let on = day_after_tomorrow();
        make_state_with_bookings(vec![
            make_booking("bk-1", &on, "14:00", 2.0),
            make_booking("bk-2", &on, "18:00", 1.0),
        ])
    }

    async fn send(uri: &str, start_time: &str) -> StatusCode {
        let body = format!(
            r#"{{"date":"{}","start_time":"{start_time}","duration_hours":2}}"#,
            day_after_tomorrow()
        );
        app(seeded())
            .oneshot(
                Request::patch(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn it_should_return_200_when_the_new_slot_is_free() {
        assert_eq!(send("/bookings/bk-1/schedule", "15:00").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn it_should_return_409_when_the_new_slot_is_taken() {
        assert_eq!(send("/bookings/bk-1/schedule", "17:00").await, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_404_for_unknown_bookings() {
        assert_eq!(send("/bookings/nope/schedule", "15:00").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_400_on_malformed_times() {
        assert_eq!(send("/bookings/bk-1/schedule", "3pm").await, StatusCode::BAD_REQUEST);
    }
}
