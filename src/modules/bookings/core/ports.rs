// Storage port for bookings.
//
// Purpose
// - One trait every backend implements so handlers never know where rows live.
//
// Responsibilities
// - Hand out the reservation snapshot the availability engine reads.
// - Persist inserts, status changes, reschedules and deletions.
//
// Boundaries
// - No conflict checking here. Callers serialize check and write themselves.
// - Updates are compare-and-set on the revision the caller decided against.

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::reservation::{Reservation, ReservationStatus};
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("booking {0} not found")]
    NotFound(String),

    #[error("booking {0} already exists")]
    AlreadyExists(String),

    #[error("booking {id} changed meanwhile (expected revision {expected}, found {actual})")]
    StaleRevision { id: String, expected: u32, actual: u32 },

    #[error("stored booking {id} is unreadable: {reason}")]
    Corrupt { id: String, reason: String },

    #[error("backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Booking>, StoreError>;

    async fn insert(&self, booking: Booking) -> Result<(), StoreError>;

    async fn update_status(
        &self,
        id: &str,
        expected_revision: u32,
        status: ReservationStatus,
        at: DateTime<Utc>,
    ) -> Result<Booking, StoreError>;

    async fn reschedule(
        &self,
        id: &str,
        expected_revision: u32,
        date: NaiveDate,
        start_time: TimeOfDay,
        duration: SessionLength,
        at: DateTime<Utc>,
    ) -> Result<Booking, StoreError>;

    async fn delete(&self, id: &str) -> Result<Booking, StoreError>;

    async fn list_reservations(&self) -> Result<Vec<Reservation>, StoreError> {
        Ok(self
            .list_bookings()
            .await?
            .iter()
            .map(Reservation::from)
            .collect())
    }
}
