//! Font catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use fontspace_core::FontId;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequireUser;
use crate::middleware::auth::ClientStorage;
use crate::models::{Font, Purchase};
use crate::query::{FontQuery, SearchTerm, parse_filter};
use crate::services::catalog;
use crate::services::uploads::{self, UploadForm};

/// Browse query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub pricing: Option<String>,
    pub featured: Option<bool>,
    pub trending: Option<bool>,
    pub sort: Option<String>,
}

impl TryFrom<BrowseParams> for FontQuery {
    type Error = AppError;

    fn try_from(params: BrowseParams) -> Result<Self> {
        let bad = |e: fontspace_core::ParseEnumError| AppError::BadRequest(e.to_string());
        Ok(Self {
            search: SearchTerm::new(params.q.as_deref()),
            category: parse_filter(params.category.as_deref()).map_err(bad)?,
            pricing: parse_filter(params.pricing.as_deref()).map_err(bad)?,
            featured_only: params.featured.unwrap_or(false),
            trending_only: params.trending.unwrap_or(false),
            sort: parse_filter(params.sort.as_deref())
                .map_err(bad)?
                .unwrap_or_default(),
        })
    }
}

/// Browse results.
#[derive(Debug, Serialize)]
pub struct FontList {
    pub total: usize,
    pub fonts: Vec<Font>,
}

/// Browse the catalog.
#[instrument(skip(storage))]
pub async fn index(
    storage: ClientStorage,
    Query(params): Query<BrowseParams>,
) -> Result<Json<FontList>> {
    let query = FontQuery::try_from(params)?;
    let fonts = query.apply(storage.get_fonts().await?);
    Ok(Json(FontList {
        total: fonts.len(),
        fonts,
    }))
}

/// Font detail.
#[instrument(skip(storage))]
pub async fn show(storage: ClientStorage, Path(id): Path<FontId>) -> Result<Json<Font>> {
    storage
        .get_font_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Font".to_string()))
}

/// Upload a new font.
#[instrument(skip(storage, user, form), fields(user_id = %user.id))]
pub async fn upload(
    storage: ClientStorage,
    RequireUser(user): RequireUser,
    Json(form): Json<UploadForm>,
) -> Result<(StatusCode, Json<Font>)> {
    let font = uploads::upload_font(&storage, &user, form).await?;
    add_breadcrumb("catalog", "Uploaded font", Some(&[("font_id", font.id.as_str())]));
    Ok((StatusCode::CREATED, Json(font)))
}

/// Count a download.
#[instrument(skip(storage))]
pub async fn download(storage: ClientStorage, Path(id): Path<FontId>) -> Result<Json<Font>> {
    let font = catalog::download_font(&storage, &id).await?;
    add_breadcrumb("catalog", "Downloaded font", Some(&[("font_id", id.as_str())]));
    Ok(Json(font))
}

/// Buy a premium font.
#[instrument(skip(storage, user), fields(user_id = %user.id))]
pub async fn purchase(
    storage: ClientStorage,
    RequireUser(user): RequireUser,
    Path(id): Path<FontId>,
) -> Result<(StatusCode, Json<Purchase>)> {
    let purchase = catalog::purchase_font(&storage, &user, &id).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}
