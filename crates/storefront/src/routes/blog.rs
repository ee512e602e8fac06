//! Blog route handlers.

use axum::{
    Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::auth::ClientStorage;
use crate::models::BlogPost;
use crate::query::{BlogQuery, SearchTerm, all_tags, related_posts};

/// Number of related posts shown under an article.
const RELATED_POSTS: usize = 3;

/// Blog index query parameters.
#[derive(Debug, Deserialize)]
pub struct BlogParams {
    pub q: Option<String>,
    pub tag: Option<String>,
}

/// Blog index.
#[derive(Debug, Serialize)]
pub struct BlogIndex {
    pub posts: Vec<BlogPost>,
    /// Every tag in use, for the tag filter.
    pub tags: Vec<String>,
}

/// A single article.
#[derive(Debug, Serialize)]
pub struct BlogArticle {
    pub post: BlogPost,
    pub related: Vec<BlogPost>,
}

/// List posts, featured first.
#[instrument(skip(storage))]
pub async fn index(
    storage: ClientStorage,
    Query(params): Query<BlogParams>,
) -> Result<Json<BlogIndex>> {
    let posts = storage.get_blog_posts().await?;
    let tags = all_tags(&posts);
    let query = BlogQuery {
        search: SearchTerm::new(params.q.as_deref()),
        tag: params.tag.filter(|t| !t.is_empty() && t != crate::query::ALL),
    };
    Ok(Json(BlogIndex {
        posts: query.apply(posts),
        tags,
    }))
}

/// Article by slug, with related posts.
#[instrument(skip(storage))]
pub async fn show(storage: ClientStorage, Path(slug): Path<String>) -> Result<Json<BlogArticle>> {
    let post = storage
        .get_blog_post_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post".to_string()))?;
    let posts = storage.get_blog_posts().await?;
    let related = related_posts(&post, &posts, RELATED_POSTS);
    Ok(Json(BlogArticle { post, related }))
}
