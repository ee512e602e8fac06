//! Designer directory route handlers.

use axum::{
    Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use tracing::instrument;

use fontspace_core::DesignerId;

use crate::error::{AppError, Result};
use crate::middleware::auth::ClientStorage;
use crate::models::Designer;
use crate::query::{DesignerDetail, DesignerQuery, SearchTerm};

/// Directory query parameters.
#[derive(Debug, Deserialize)]
pub struct DirectoryParams {
    pub q: Option<String>,
}

/// List designers, featured first.
#[instrument(skip(storage))]
pub async fn index(
    storage: ClientStorage,
    Query(params): Query<DirectoryParams>,
) -> Result<Json<Vec<Designer>>> {
    let query = DesignerQuery {
        search: SearchTerm::new(params.q.as_deref()),
    };
    Ok(Json(query.apply(storage.get_designers().await?)))
}

/// Designer page with their fonts.
#[instrument(skip(storage))]
pub async fn show(
    storage: ClientStorage,
    Path(id): Path<DesignerId>,
) -> Result<Json<DesignerDetail>> {
    let designer = storage
        .get_designer_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Designer".to_string()))?;
    let fonts = storage.get_fonts().await?;
    Ok(Json(DesignerDetail::build(designer, &fonts)))
}
