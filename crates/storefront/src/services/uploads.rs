//! Font upload.
//!
//! Validation runs in a fixed order and stops at the first failure, which is
//! reported as a single message suitable for showing inline on the form.

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use fontspace_core::{Category, FileFormat, FontId, Price, PricingTier};

use super::{non_blank, today};
use crate::models::{Font, User};
use crate::storage::{KeyValueStore, Storage, StorageError};

/// Range of the mock file size assigned to uploads, in bytes.
const MOCK_FILE_SIZE: std::ops::Range<u64> = 100_000..600_000;

const DEFAULT_LANGUAGE: &str = "English";

/// Upload failures.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Font name is required")]
    MissingName,

    #[error("Please select a category")]
    MissingCategory,

    #[error("Please enter a valid price for premium fonts")]
    InvalidPrice,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A price as typed into the form, either a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(serde_json::Number),
    Text(String),
}

impl PriceInput {
    fn parse(&self) -> Option<Price> {
        match self {
            Self::Number(n) => Price::parse_positive(&n.to_string()).ok(),
            Self::Text(s) => Price::parse_positive(s).ok(),
        }
    }
}

/// Submitted upload form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadForm {
    pub name: String,
    /// Defaults to the uploader's username when blank.
    pub designer: Option<String>,
    pub category: Option<String>,
    pub pricing_tier: PricingTier,
    pub price: Option<PriceInput>,
    pub description: String,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    pub file_format: FileFormat,
}

impl UploadForm {
    /// Validate the form and build the font record.
    ///
    /// # Errors
    ///
    /// Returns the first failing validation as an `UploadError`.
    pub fn into_font(self, uploader: &User, rng: &mut impl Rng) -> Result<Font, UploadError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UploadError::MissingName);
        }

        let category: Category = self
            .category
            .as_deref()
            .map(str::trim)
            .and_then(|c| c.parse().ok())
            .ok_or(UploadError::MissingCategory)?;

        let price = match self.pricing_tier {
            PricingTier::Premium => Some(
                self.price
                    .as_ref()
                    .and_then(PriceInput::parse)
                    .ok_or(UploadError::InvalidPrice)?,
            ),
            PricingTier::Free | PricingTier::Freemium => None,
        };

        let slug = slugify(name);
        let ext = self.file_format.extension();
        let preview_url = (self.pricing_tier == PricingTier::Freemium)
            .then(|| format!("/fonts/{slug}-preview.{ext}"));

        let mut languages = dedup_trimmed(self.languages);
        if languages.is_empty() {
            languages.push(DEFAULT_LANGUAGE.to_owned());
        }

        Ok(Font {
            id: FontId::generate(),
            name: name.to_owned(),
            designer: non_blank(self.designer.as_deref())
                .unwrap_or_else(|| uploader.username.clone()),
            category,
            pricing_tier: self.pricing_tier,
            languages,
            tags: dedup_trimmed(self.tags),
            description: self.description.trim().to_owned(),
            preview_image: None,
            file_url: format!("/fonts/{slug}.{ext}"),
            file_format: self.file_format,
            file_size: rng.random_range(MOCK_FILE_SIZE),
            downloads: 0,
            upload_date: today(),
            uploaded_by: uploader.id.clone(),
            featured: false,
            trending: false,
            price,
            preview_url,
        })
    }
}

/// Validate and store an upload.
///
/// # Errors
///
/// Returns an `UploadError` for invalid forms or storage failures.
pub async fn upload_font<S: KeyValueStore>(
    storage: &Storage<S>,
    uploader: &User,
    form: UploadForm,
) -> Result<Font, UploadError> {
    let font = form.into_font(uploader, &mut rand::rng())?;
    storage.save_font(font.clone()).await?;
    Ok(font)
}

/// Lower-case `name` and replace each whitespace run with `-`.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn dedup_trimmed(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_owned());
        }
    }
    out
}
