use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::use_cases::errors::error_response;
use crate::shared::core::primitives::{PrimitiveError, parse_date};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ByContactParams {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct AdminListParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub booking: Booking,
}

fn optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, PrimitiveError> {
    raw.filter(|raw| !raw.is_empty()).map(parse_date).transpose()
}

pub async fn by_contact(
    State(state): State<AppState>,
    Query(params): Query<ByContactParams>,
) -> impl IntoResponse {
    let (Some(email), Some(phone)) = (params.email, params.phone) else {
        return error_response(StatusCode::BAD_REQUEST, "email and phone are required");
    };
    let date = match optional_date(params.date.as_deref()) {
        Ok(date) => date,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    match state.bookings.by_contact(&email, &phone, date).await {
        Ok(bookings) => Json(BookingsResponse { bookings }).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn by_id(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.bookings.by_id(&id).await {
        Ok(booking) => Json(BookingResponse { booking }).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn admin_list(
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> impl IntoResponse {
    let range = optional_date(params.start_date.as_deref())
        .and_then(|from| Ok((from, optional_date(params.end_date.as_deref())?)));
    let (from, to) = match range {
        Ok(range) => range,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    match state.bookings.admin_list(from, to).await {
        Ok(bookings) => Json(BookingsResponse { bookings }).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod list_bookings_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::bookings::make_booking;
    use crate::tests::fixtures::state::make_state_with_bookings;

    use super::{admin_list, by_contact, by_id};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/bookings", get(by_contact))
            .route("/bookings/{id}", get(by_id))
            .route("/admin/bookings", get(admin_list))
            .with_state(state)
    }

    fn seeded() -> AppState {
        make_state_with_bookings(vec![
            make_booking("bk-1", "2025-03-01", "14:00", 2.0),
            make_booking("bk-2", "2025-03-04", "18:00", 1.0),
        ])
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn it_should_list_bookings_for_a_contact() {
        let (status, json) = get_json(
            seeded(),
            "/bookings?email=sam%40example.com&phone=07123456789&date=2025-03-04",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["bookings"].as_array().unwrap().len(), 1);
        assert_eq!(json["bookings"][0]["id"], "bk-2");
    }

    #[tokio::test]
    async fn it_should_return_400_without_email_and_phone() {
        let (status, _) = get_json(seeded(), "/bookings?email=sam%40example.com").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_a_single_booking_or_404() {
        let (status, json) = get_json(seeded(), "/bookings/bk-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["booking"]["start_time"], "14:00");

        let (status, _) = get_json(seeded(), "/bookings/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_filter_the_admin_list_by_date_range() {
        let (status, json) = get_json(
            seeded(),
            "/admin/bookings?start_date=2025-03-02&end_date=2025-03-31",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["bookings"].as_array().unwrap().len(), 1);

        let (status, _) = get_json(seeded(), "/admin/bookings?start_date=March").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
