//! Profile and dashboard route handlers.

use axum::{Json, extract::Path};
use tracing::instrument;

use fontspace_core::UserId;

use crate::error::{AppError, Result};
use crate::middleware::auth::ClientStorage;
use crate::middleware::{OptionalUser, RequireUser};
use crate::query::{DashboardView, ProfileView};

/// Public profile of any user.
///
/// Private purchases are only listed when viewing your own profile.
#[instrument(skip(storage, viewer))]
pub async fn profile(
    storage: ClientStorage,
    OptionalUser(viewer): OptionalUser,
    Path(id): Path<UserId>,
) -> Result<Json<ProfileView>> {
    let user = storage
        .get_user_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;
    let fonts = storage.get_fonts().await?;
    let purchases = storage.get_user_purchases(&id).await?;

    Ok(Json(ProfileView::build(
        user,
        &fonts,
        purchases,
        viewer.as_ref().map(|v| &v.id),
    )))
}

/// The logged-in user's dashboard.
#[instrument(skip_all)]
pub async fn dashboard(
    storage: ClientStorage,
    RequireUser(user): RequireUser,
) -> Result<Json<DashboardView>> {
    let fonts = storage.get_fonts().await?;
    let purchases = storage.get_user_purchases(&user.id).await?;
    let application = storage.get_user_designer_application(&user.id).await?;
    Ok(Json(DashboardView::build(user, &fonts, purchases, application)))
}
