use crate::modules::bookings::core::ports::StoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("this time slot is no longer available (held by {conflicting_id})")]
    SlotTaken { conflicting_id: String },

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("booking {0} not found")]
    NotFound(String),
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::SlotTaken { .. }
            | ApplicationError::Store(StoreError::StaleRevision { .. }) => StatusCode::CONFLICT,
            ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) | ApplicationError::Store(StoreError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApplicationError::Store(_) | ApplicationError::Outbox(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            return error_response(status, "internal error");
        }
        error_response(status, self.to_string())
    }
}
