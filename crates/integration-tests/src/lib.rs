//! Integration tests for FontSpace.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fontspace-integration-tests
//! ```
//!
//! Tests drive the full storefront router in-process with
//! `tower::ServiceExt::oneshot`. Sessions use the tower-sessions
//! `MemoryStore`, so no database is required. [`TestClient`] carries the
//! session cookie between requests the way a browser would, which is what
//! gives each client its own marketplace state.
//!
//! # Test Categories
//!
//! - `catalog` - Browsing, downloads, purchases and uploads
//! - `accounts` - Login, registration, profiles and designer applications

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::MemoryStore;

use fontspace_storefront::config::StorefrontConfig;
use fontspace_storefront::routes;
use fontspace_storefront::state::AppState;

/// Build the storefront app over in-memory sessions.
///
/// # Panics
///
/// Panics if the test configuration is rejected.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::expect_used)]
pub fn test_app() -> Router {
    let config = StorefrontConfig::from_lookup(|key| {
        (key == "STOREFRONT_BASE_URL").then(|| "http://localhost:3000".to_owned())
    })
    .expect("test configuration is valid");
    routes::app(AppState::new(config, None), MemoryStore::default())
}

/// A response with its status and decoded JSON body.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` for empty bodies.
    pub body: Value,
}

/// An in-process HTTP client holding one session cookie.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// A fresh client against `app`, with no session.
    #[must_use]
    pub const fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// Send a `GET` request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, &[]).await
    }

    /// Send a `GET` request with one extra header.
    pub async fn get_with_header(&mut self, uri: &str, name: &str, value: &str) -> TestResponse {
        self.send(Method::GET, uri, None, &[(name, value)]).await
    }

    /// Send a `POST` request with an optional JSON body.
    pub async fn post(&mut self, uri: &str, body: Option<Value>) -> TestResponse {
        self.send(Method::POST, uri, body, &[]).await
    }

    /// Log in as a seeded user.
    pub async fn login(&mut self, email: &str) -> TestResponse {
        self.post(
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "password" })),
        )
        .await
    }

    #[allow(clippy::expect_used)]
    async fn send(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("request is well formed");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            && let Some(pair) = set_cookie.split(';').next()
        {
            self.cookie = Some(pair.to_owned());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
