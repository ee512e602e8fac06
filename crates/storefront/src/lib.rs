//! FontSpace Storefront library.
//!
//! This crate provides the marketplace API as a library, allowing it to be
//! tested and reused. The CLI drives the same [`storage`] and [`query`]
//! modules against a JSON file.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
