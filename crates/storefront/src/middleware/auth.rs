//! Storage and authentication extractors.
//!
//! The client's collections live in its session, so every extractor here
//! starts from the `Session` placed in the request extensions by
//! `SessionManagerLayer`.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::User;
use crate::storage::{SessionStore, Storage};

/// Storage for the requesting client.
pub type ClientStorage = Storage<SessionStore>;

fn session_storage(parts: &Parts) -> Result<ClientStorage, AppError> {
    let session = parts
        .extensions
        .get::<Session>()
        .cloned()
        .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;
    Ok(Storage::new(SessionStore::new(session)))
}

impl<S> FromRequestParts<S> for Storage<SessionStore>
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        session_storage(parts)
    }
}

/// Extractor that requires a logged-in user.
///
/// Rejects with `401` and `{"error": "Please sign in to continue"}` when the
/// client has no current user.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireUser(user): RequireUser) -> String {
///     format!("Hello, {}!", user.username)
/// }
/// ```
pub struct RequireUser(pub User);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        session_storage(parts)?
            .get_current_user()
            .await?
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("Please sign in to continue".to_string()))
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireUser`, this does not reject the request if nobody is
/// logged in.
pub struct OptionalUser(pub Option<User>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_storage(parts)?.get_current_user().await?))
    }
}
