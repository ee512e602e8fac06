//! Request IDs for log and error correlation.
//!
//! An `x-request-id` set by an upstream proxy is reused when it is short
//! printable ASCII; anything else is replaced with a fresh UUID v4. The ID is
//! recorded on the `http_request` span, tagged on the Sentry scope and echoed
//! on the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upstream IDs longer than this are replaced.
const MAX_UPSTREAM_LEN: usize = 128;

fn upstream_id(request: &Request) -> Option<String> {
    let value = request.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
    let usable = !value.is_empty()
        && value.len() <= MAX_UPSTREAM_LEN
        && value.bytes().all(|b| b.is_ascii_graphic());
    usable.then(|| value.to_owned())
}

/// Assign a request ID and echo it on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = upstream_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use axum::{Router, body::Body, middleware::from_fn, routing::get};
    use tower::ServiceExt;

    use super::*;

    async fn echoed(header: Option<&str>) -> String {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(from_fn(request_id_middleware));
        let mut request = Request::builder().uri("/");
        if let Some(value) = header {
            request = request.header(REQUEST_ID_HEADER, value);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_owned()
    }

    #[tokio::test]
    async fn test_generates_id_when_missing() {
        assert!(Uuid::parse_str(&echoed(None).await).is_ok());
    }

    #[tokio::test]
    async fn test_reuses_upstream_id() {
        assert_eq!(echoed(Some("cf-8a1b2c")).await, "cf-8a1b2c");
    }

    #[tokio::test]
    async fn test_replaces_unusable_upstream_id() {
        let long = "x".repeat(MAX_UPSTREAM_LEN + 1);
        assert!(Uuid::parse_str(&echoed(Some(&long)).await).is_ok());
        assert!(Uuid::parse_str(&echoed(Some("has space")).await).is_ok());
    }
}
