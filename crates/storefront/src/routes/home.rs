//! Home page route handler.

use axum::Json;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::auth::ClientStorage;
use crate::query::HomeSummary;

/// Featured and trending fonts plus catalog counts.
#[instrument(skip(storage))]
pub async fn home(storage: ClientStorage) -> Result<Json<HomeSummary>> {
    let fonts = storage.get_fonts().await?;
    Ok(Json(HomeSummary::build(&fonts)))
}
