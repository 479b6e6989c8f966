// Contact detail validation for submitted bookings.

use crate::modules::bookings::core::booking::ContactDetails;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email pattern: {e}"))
});

// UK mobile, landline, freephone and local-rate numbers, national or +44 form.
static UK_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:07\d{9}",
        r"|0[123]\d{8,9}",
        r"|08(?:00|45)\d{6,7}",
        r"|\+447\d{9}",
        r"|\+441\d{9,10})$",
    ))
    .unwrap_or_else(|e| panic!("phone pattern: {e}"))
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid phone number")]
    InvalidPhone,
}

/// Keep digits and a leading `+`, dropping spaces, dashes and brackets.
pub fn normalize_phone(raw: &str) -> String {
    raw.trim()
        .char_indices()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect()
}

pub fn validate_contact(contact: &ContactDetails) -> Result<(), ContactError> {
    if contact.name.trim().is_empty() {
        return Err(ContactError::MissingField("name"));
    }
    if contact.email.trim().is_empty() {
        return Err(ContactError::MissingField("email"));
    }
    if contact.phone.trim().is_empty() {
        return Err(ContactError::MissingField("phone"));
    }
    if !EMAIL.is_match(contact.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }
    if !UK_PHONE.is_match(&normalize_phone(&contact.phone)) {
        return Err(ContactError::InvalidPhone);
    }
    Ok(())
}
