//! Blog post record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fontspace_core::BlogPostId;

/// A blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    /// Author display name.
    pub author: String,
    pub publish_date: NaiveDate,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}
