//! Font catalog record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fontspace_core::{Category, FileFormat, FontId, Price, PricingTier, UserId};

/// A font listed in the marketplace.
///
/// `designer` is a display name, not a reference to a [`Designer`](super::Designer)
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub id: FontId,
    pub name: String,
    pub designer: String,
    pub category: Category,
    pub pricing_tier: PricingTier,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    pub file_url: String,
    pub file_format: FileFormat,
    /// File size in bytes.
    pub file_size: u64,
    pub downloads: u64,
    pub upload_date: NaiveDate,
    pub uploaded_by: UserId,
    pub featured: bool,
    pub trending: bool,
    /// Set for premium fonts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Set for freemium fonts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl Font {
    /// Whether the font is sold rather than downloaded.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.pricing_tier == PricingTier::Premium
    }
}
