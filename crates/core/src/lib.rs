//! FontSpace Core - Shared types library.
//!
//! This crate provides common types used across all FontSpace components:
//! - `storefront` - JSON API for browsing, uploading and purchasing fonts
//! - `cli` - Command-line tools for seeding and managing stores
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   closed enums (category, pricing tier, file format, application status)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
