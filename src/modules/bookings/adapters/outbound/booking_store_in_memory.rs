// In memory implementation of the BookingStore port.
//
// Purpose
// - Back handler tests and local runs without touching the filesystem.
//
// Responsibilities
// - Keep bookings in insertion order behind a RwLock.
// - Simulate an offline backend and slow writes for failure and race tests.

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::ports::{BookingStore, StoreError};
use crate::modules::bookings::core::reservation::ReservationStatus;
use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookingStore {
    inner: RwLock<Vec<Booking>>,
    offline: bool,
    delay_write_ms: AtomicU64,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            inner: RwLock::new(bookings),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::Relaxed);
    }

    async fn delay_write(&self) {
        let delay = self.delay_write_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("Booking store offline".into()));
        }
        Ok(())
    }

    async fn modify<F>(
        &self,
        id: &str,
        expected_revision: u32,
        change: F,
    ) -> Result<Booking, StoreError>
    where
        F: FnOnce(&mut Booking) + Send,
    {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.inner.write().await;
        let booking = guard
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if booking.revision != expected_revision {
            return Err(StoreError::StaleRevision {
                id: id.to_string(),
                expected: expected_revision,
                actual: booking.revision,
            });
        }
        change(booking);
        Ok(booking.clone())
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .inner
            .read()
            .await
            .iter()
            .find(|booking| booking.id == id)
            .cloned())
    }

    async fn insert(&self, booking: Booking) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.inner.write().await;
        if guard.iter().any(|existing| existing.id == booking.id) {
            return Err(StoreError::AlreadyExists(booking.id));
        }
        guard.push(booking);
        Ok(())
    }

    async fn update_status(
        &self,
        id: &str,
        expected_revision: u32,
        status: ReservationStatus,
        at: DateTime<Utc>,
    ) -> Result<Booking, StoreError> {
        self.modify(id, expected_revision, |booking| booking.apply_status(status, at))
            .await
    }

    async fn reschedule(
        &self,
        id: &str,
        expected_revision: u32,
        date: NaiveDate,
        start_time: TimeOfDay,
        duration: SessionLength,
        at: DateTime<Utc>,
    ) -> Result<Booking, StoreError> {
        self.modify(id, expected_revision, |booking| {
            booking.apply_schedule(date, start_time, duration, at)
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<Booking, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let index = guard
            .iter()
            .position(|booking| booking.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(guard.remove(index))
    }
}
