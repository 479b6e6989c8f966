// End to end: submit, look up, cancel, reschedule and delete through the public router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::reservations::date_in_days;
use crate::tests::fixtures::state::make_test_state;

struct Client {
    app: Router,
}

impl Client {
    fn new() -> Self {
        Self {
            app: router(make_test_state()),
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    async fn slots(&self, date: &str, duration: f64) -> Vec<String> {
        let (status, json) = self
            .send("GET", &format!("/availability?date={date}&duration={duration}"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(json["available_slots"].clone()).unwrap()
    }
}

fn booking_date() -> String {
    date_in_days(5)
}

fn submission(date: &str, start_time: &str) -> Value {
    json!({
        "date": date,
        "start_time": start_time,
        "duration_hours": 2,
        "adults": 2,
        "children": 1,
        "contact_name": "Sam Player",
        "contact_email": "sam@example.com",
        "contact_phone": "07123 456789",
    })
}

#[tokio::test]
async fn it_should_keep_availability_consistent_across_the_booking_lifecycle() {
    let client = Client::new();
    let date = booking_date();
    assert_eq!(client.slots(&date, 1.0).await.len(), 19);

    let (status, json) = client
        .send("POST", "/bookings", Some(submission(&date, "14:00")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = json["booking"]["id"].as_str().unwrap().to_string();

    let slots = client.slots(&date, 1.0).await;
    assert!(slots.contains(&"13:00".to_string()));
    assert!(!slots.contains(&"13:30".to_string()));
    assert!(!slots.contains(&"15:30".to_string()));
    assert!(slots.contains(&"16:00".to_string()));

    let (status, _) = client
        .send("POST", "/bookings", Some(submission(&date, "15:00")))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = client
        .send(
            "GET",
            &format!("/bookings?email=SAM%40example.com&phone=07123456789&date={date}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bookings"].as_array().unwrap().len(), 1);

    let (status, json) = client
        .send(
            "PATCH",
            &format!("/bookings/{id}/schedule"),
            Some(json!({ "date": date, "start_time": "17:00", "duration_hours": 2 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["booking"]["start_time"], "17:00");
    assert!(client.slots(&date, 1.0).await.contains(&"14:00".to_string()));

    let (status, json) = client
        .send(
            "PATCH",
            "/admin/bookings",
            Some(json!({ "booking_id": id, "status": "cancelled" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["booking"]["status"], "cancelled");
    assert_eq!(client.slots(&date, 1.0).await.len(), 19);

    let (status, _) = client
        .send(
            "PATCH",
            &format!("/bookings/{id}/schedule"),
            Some(json!({ "date": date, "start_time": "12:00", "duration_hours": 2 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = client
        .send("DELETE", &format!("/admin/bookings?booking_id={id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = client.send("GET", &format!("/bookings/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_book_back_to_back_sessions() {
    let client = Client::new();
    let date = booking_date();
    for start in ["12:00", "14:00", "16:00"] {
        let (status, _) = client
            .send("POST", "/bookings", Some(submission(&date, start)))
            .await;
        assert_eq!(status, StatusCode::CREATED, "start {start}");
    }
    let (status, json) = client.send("GET", "/admin/bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bookings"].as_array().unwrap().len(), 3);
    assert_eq!(client.slots(&date, 2.0).await, vec!["18:00", "18:30", "19:00", "19:30", "20:00"]);
}
