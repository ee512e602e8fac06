//! Designer application route handler.

use axum::{Json, http::StatusCode};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::middleware::auth::ClientStorage;
use crate::models::DesignerApplication;
use crate::services::designer_applications::{self, ApplicationForm};

/// Submit a designer application for review.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn submit(
    storage: ClientStorage,
    RequireUser(user): RequireUser,
    Json(form): Json<ApplicationForm>,
) -> Result<(StatusCode, Json<DesignerApplication>)> {
    let application = designer_applications::submit_application(&storage, &user, form).await?;
    Ok((StatusCode::CREATED, Json(application)))
}
