//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Mock login, registration and the current-user pointer
//! - `uploads` - Font upload form validation and record construction
//! - `designer_applications` - Designer application submission
//! - `catalog` - Downloads and purchases
//!
//! Services operate on a [`Storage`](crate::storage::Storage) borrowed from
//! the caller and never hold state of their own.

pub mod auth;
pub mod catalog;
pub mod designer_applications;
pub mod uploads;

use chrono::{NaiveDate, Utc};

/// Today's date in UTC, used for every `*Date` field written by a service.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Trim `value`, mapping blank input to `None`.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
