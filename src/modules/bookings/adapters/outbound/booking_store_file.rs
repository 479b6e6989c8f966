// JSON file implementation of the BookingStore port.
//
// Purpose
// - Persist bookings across restarts without a database.
//
// Responsibilities
// - Map the camelCase row shape on disk to Booking and back.
// - Read rows written by the earlier site: totalPrice in pounds, partyPackage, no updatedAt.
// - Create the data directory on first write; treat a missing file as no bookings.
// - Rewrite the whole file on every mutation through a temp file and rename.
//
// Boundaries
// - One process owns the file. Mutations are serialized by an internal mutex.
// - Status changes and reschedules fail with StaleRevision when the row moved on.

use crate::modules::bookings::core::booking::{
    Booking, ContactDetails, PaymentMethod, PaymentStatus,
};
use crate::modules::bookings::core::ports::{BookingStore, StoreError};
use crate::modules::bookings::core::reservation::ReservationStatus;
use crate::shared::core::primitives::{SessionLength, TimeOfDay, parse_date};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRow {
    id: String,
    date: String,
    start_time: String,
    duration: f64,
    status: ReservationStatus,
    adults: u32,
    children: u32,
    contact_name: String,
    contact_email: String,
    contact_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
    #[serde(default, alias = "partyPackage", skip_serializing_if = "Option::is_none")]
    package_id: Option<String>,
    #[serde(default)]
    total_price_pence: Option<u64>,
    #[serde(default, skip_serializing)]
    total_price: Option<f64>,
    payment_method: PaymentMethod,
    payment_status: PaymentStatus,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default = "first_revision")]
    revision: u32,
}

fn first_revision() -> u32 {
    1
}

impl From<&Booking> for BookingRow {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.clone(),
            date: booking.date.format("%Y-%m-%d").to_string(),
            start_time: booking.start_time.to_string(),
            duration: booking.duration.hours(),
            status: booking.status,
            adults: booking.adults,
            children: booking.children,
            contact_name: booking.contact.name.clone(),
            contact_email: booking.contact.email.clone(),
            contact_phone: booking.contact.phone.clone(),
            special_requests: booking.special_requests.clone(),
            package_id: booking.package_id.clone(),
            total_price_pence: Some(booking.total_price_pence),
            total_price: None,
            payment_method: booking.payment_method,
            payment_status: booking.payment_status,
            created_at: booking.created_at,
            updated_at: Some(booking.updated_at),
            revision: booking.revision,
        }
    }
}

impl TryFrom<BookingRow> for Booking {
    type Error = StoreError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| StoreError::Corrupt {
            id: row.id.clone(),
            reason,
        };
        let date = parse_date(&row.date).map_err(|e| corrupt(e.to_string()))?;
        let start_time = TimeOfDay::parse(&row.start_time).map_err(|e| corrupt(e.to_string()))?;
        let duration =
            SessionLength::from_hours(row.duration).map_err(|e| corrupt(e.to_string()))?;
        let total_price_pence = match (row.total_price_pence, row.total_price) {
            (Some(pence), _) => pence,
            (None, Some(pounds)) if pounds.is_finite() && pounds >= 0.0 => {
                (pounds * 100.0).round() as u64
            }
            (None, Some(pounds)) => return Err(corrupt(format!("invalid total price {pounds}"))),
            (None, None) => return Err(corrupt("missing total price".into())),
        };
        Ok(Booking {
            id: row.id,
            date,
            start_time,
            duration,
            status: row.status,
            adults: row.adults,
            children: row.children,
            contact: ContactDetails {
                name: row.contact_name,
                email: row.contact_email,
                phone: row.contact_phone,
            },
            special_requests: row.special_requests,
            package_id: row.package_id,
            total_price_pence,
            payment_method: row.payment_method,
            payment_status: row.payment_status,
            created_at: row.created_at,
            updated_at: row.updated_at.unwrap_or(row.created_at),
            revision: row.revision,
        })
    }
}

pub struct FileBookingStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBookingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Booking>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let rows: Vec<BookingRow> = serde_json::from_slice(&raw)?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn save(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let rows: Vec<BookingRow> = bookings.iter().map(BookingRow::from).collect();
        let json = serde_json::to_vec_pretty(&rows)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "bookings file written");
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
        let _guard = self.write_lock.lock().await;
        let mut bookings = self.load().await?;
        let booking = bookings
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
        let updated = booking.clone();
        self.save(&bookings).await?;
        Ok(updated)
    }
}

#[async_trait]
impl BookingStore for FileBookingStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError> {
        self.load().await
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|booking| booking.id == id))
    }

    async fn insert(&self, booking: Booking) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut bookings = self.load().await?;
        if bookings.iter().any(|existing| existing.id == booking.id) {
            return Err(StoreError::AlreadyExists(booking.id));
        }
        bookings.push(booking);
        self.save(&bookings).await
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
        let _guard = self.write_lock.lock().await;
        let mut bookings = self.load().await?;
        let index = bookings
            .iter()
            .position(|booking| booking.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = bookings.remove(index);
        self.save(&bookings).await?;
        Ok(removed)
    }
}
