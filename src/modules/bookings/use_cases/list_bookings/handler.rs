// Read-side queries over stored bookings.
//
// Responsibilities
// - Customer lookup by email and phone, optionally for one date.
// - Single booking by id.
// - Admin listing with an optional inclusive date range, newest first.

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::contact::normalize_phone;
use crate::modules::bookings::core::ports::BookingStore;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct BookingQueries<TStore>
where
    TStore: BookingStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> BookingQueries<TStore>
where
    TStore: BookingStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Email matches case-insensitively; phone numbers match after stripping formatting.
    pub async fn by_contact(
        &self,
        email: &str,
        phone: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Booking>, ApplicationError> {
        let email = email.trim().to_lowercase();
        let phone = normalize_phone(phone);
        Ok(self
            .store
            .list_bookings()
            .await?
            .into_iter()
            .filter(|b| b.contact.email.trim().to_lowercase() == email)
            .filter(|b| normalize_phone(&b.contact.phone) == phone)
            .filter(|b| date.is_none_or(|d| b.date == d))
            .collect())
    }

    pub async fn by_id(&self, id: &str) -> Result<Booking, ApplicationError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(id.to_string()))
    }

    pub async fn admin_list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Booking>, ApplicationError> {
        let mut bookings: Vec<Booking> = self
            .store
            .list_bookings()
            .await?
            .into_iter()
            .filter(|b| from.is_none_or(|from| b.date >= from))
            .filter(|b| to.is_none_or(|to| b.date <= to))
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }
}
