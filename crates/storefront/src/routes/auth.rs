//! Authentication route handlers.
//!
//! Login state is the `currentUser` entry in the client's store; these
//! handlers only move it in and out.

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::middleware::auth::ClientStorage;
use crate::models::User;
use crate::services::auth::AuthService;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Email address or user ID.
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response for `GET /api/auth/me`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Log in with email (or user ID) and password.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn login(storage: ClientStorage, Json(form): Json<LoginForm>) -> Result<Json<User>> {
    let user = AuthService::new(&storage)
        .login(&form.email, &form.password)
        .await?;
    set_sentry_user(&user.id, Some(&user.email));
    Ok(Json(user))
}

/// Create an account and log it in.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn register(
    storage: ClientStorage,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<User>)> {
    let user = AuthService::new(&storage)
        .register(&form.username, &form.email, &form.password)
        .await?;
    set_sentry_user(&user.id, Some(&user.email));
    Ok((StatusCode::CREATED, Json(user)))
}

/// Log out.
#[instrument(skip_all)]
pub async fn logout(storage: ClientStorage) -> Result<StatusCode> {
    AuthService::new(&storage).logout().await?;
    clear_sentry_user();
    Ok(StatusCode::NO_CONTENT)
}

/// The current user, if logged in.
#[instrument(skip_all)]
pub async fn me(storage: ClientStorage) -> Result<Json<CurrentUserResponse>> {
    let user = AuthService::new(&storage).current_user().await?;
    Ok(Json(CurrentUserResponse {
        authenticated: user.is_some(),
        user,
    }))
}
