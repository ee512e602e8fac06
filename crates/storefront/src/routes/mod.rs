//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Liveness check
//! GET  /health/ready                   - Readiness check (session database)
//!
//! # Catalog
//! GET  /api/home                       - Featured/trending fonts and counts
//! GET  /api/fonts                      - Browse (?q=&category=&pricing=&featured=&trending=&sort=)
//! POST /api/fonts                      - Upload a font (auth)
//! GET  /api/fonts/{id}                 - Font detail
//! POST /api/fonts/{id}/download        - Count a download
//! POST /api/fonts/{id}/purchase        - Buy a premium font (auth)
//! GET  /api/designers                  - Designer directory (?q=)
//! GET  /api/designers/{id}             - Designer page
//! GET  /api/blog                       - Blog index (?q=&tag=)
//! GET  /api/blog/{slug}                - Post with related posts
//!
//! # Accounts
//! GET  /api/users/{id}                 - Public profile
//! GET  /api/dashboard                  - Own dashboard (auth)
//! POST /api/designer-applications      - Apply to become a designer (auth)
//!
//! # Auth
//! POST /api/auth/login                 - Login
//! POST /api/auth/register              - Register
//! POST /api/auth/logout                - Logout
//! GET  /api/auth/me                    - Current user
//! ```
//!
//! Every `/api` route reads and writes the requesting client's collections
//! through its session.

pub mod account;
pub mod applications;
pub mod auth;
pub mod blog;
pub mod designers;
pub mod fonts;
pub mod health;
pub mod home;

use std::time::Duration;

use axum::{
    Router,
    http::{Request, Response},
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tower_sessions::SessionStore;
use tracing::Span;

use crate::middleware::{create_session_layer, request_id_middleware};
use crate::state::AppState;

/// Create the font routes router.
pub fn font_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(fonts::index).post(fonts::upload))
        .route("/{id}", get(fonts::show))
        .route("/{id}/download", post(fonts::download))
        .route("/{id}/purchase", post(fonts::purchase))
}

/// Create the designer routes router.
pub fn designer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(designers::index))
        .route("/{id}", get(designers::show))
}

/// Create the blog routes router.
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::index))
        .route("/{slug}", get(blog::show))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create all `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home::home))
        .nest("/fonts", font_routes())
        .nest("/designers", designer_routes())
        .nest("/blog", blog_routes())
        .route("/users/{id}", get(account::profile))
        .route("/dashboard", get(account::dashboard))
        .route("/designer-applications", post(applications::submit))
        .nest("/auth", auth_routes())
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
}

/// Build the full application with its session, tracing and request-ID
/// layers.
///
/// Sentry layers are added by `main`, outside this router.
pub fn app<S: SessionStore + Clone>(state: AppState, session_store: S) -> Router {
    let session_layer = create_session_layer(session_store, state.config());

    routes()
        .layer(session_layer)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
