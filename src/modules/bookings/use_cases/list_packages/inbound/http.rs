use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::bookings::core::packages::PartyPackage;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct PackagesResponse<'a> {
    pub packages: &'a [PartyPackage],
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(PackagesResponse {
        packages: state.policy.catalog.all(),
    })
    .into_response()
}
