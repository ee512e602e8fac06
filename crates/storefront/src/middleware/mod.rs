//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (hub per request, capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions, `PostgreSQL` or in-memory store)
//!
//! Handlers reach the client's collections through the extractors in
//! [`auth`].

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::{OptionalUser, RequireUser};
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
