//! Closed enums for catalog and account records.
//!
//! Every enum serializes to the exact lower-case strings used in the stored
//! JSON (`"sans-serif"`, `"freemium"`, `"otf"`, `"pending"`), and parses from
//! the same strings via [`FromStr`](std::str::FromStr).

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    /// Create an error for `value`, which is not a valid `kind`.
    #[must_use]
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Font category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Serif,
    SansSerif,
    Display,
    Handwriting,
    Monospace,
    Symbol,
}

impl Category {
    /// All categories, in catalog display order.
    pub const ALL: [Self; 6] = [
        Self::SansSerif,
        Self::Serif,
        Self::Display,
        Self::Handwriting,
        Self::Monospace,
        Self::Symbol,
    ];

    /// The stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Display => "display",
            Self::Handwriting => "handwriting",
            Self::Monospace => "monospace",
            Self::Symbol => "symbol",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("category", s))
    }
}

/// Pricing tier.
///
/// Controls whether a font is offered as a download (free, freemium) or a
/// purchase (premium).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    #[default]
    Free,
    Freemium,
    Premium,
}

impl PricingTier {
    /// All tiers, cheapest first.
    pub const ALL: [Self; 3] = [Self::Free, Self::Freemium, Self::Premium];

    /// The stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Freemium => "freemium",
            Self::Premium => "premium",
        }
    }
}

impl std::fmt::Display for PricingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for PricingTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "freemium" => Ok(Self::Freemium),
            "premium" => Ok(Self::Premium),
            _ => Err(ParseEnumError::new("pricing tier", s)),
        }
    }
}

/// Font file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Ttf,
    Otf,
    Zip,
}

impl FileFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ttf => "ttf",
            Self::Otf => "otf",
            Self::Zip => "zip",
        }
    }
}

impl std::str::FromStr for FileFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ttf" => Ok(Self::Ttf),
            "otf" => Ok(Self::Otf),
            "zip" => Ok(Self::Zip),
            _ => Err(ParseEnumError::new("file format", s)),
        }
    }
}

/// Designer application status as tracked on a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DesignerApplicationStatus {
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

/// Review state of a submitted designer application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl From<ApplicationReviewStatus> for DesignerApplicationStatus {
    fn from(status: ApplicationReviewStatus) -> Self {
        match status {
            ApplicationReviewStatus::Pending => Self::Pending,
            ApplicationReviewStatus::Approved => Self::Approved,
            ApplicationReviewStatus::Rejected => Self::Rejected,
        }
    }
}

impl std::fmt::Display for ApplicationReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&Category::SansSerif).unwrap();
        assert_eq!(json, "\"sans-serif\"");
        assert_eq!("sans-serif".parse::<Category>().unwrap(), Category::SansSerif);
        assert!("comic".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_from_str_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json.trim_matches('"'), category.as_str());
        }
    }

    #[test]
    fn test_pricing_tier_parse() {
        assert_eq!("premium".parse::<PricingTier>().unwrap(), PricingTier::Premium);
        let err = "all".parse::<PricingTier>().unwrap_err();
        assert_eq!(err.to_string(), "invalid pricing tier: all");
    }

    #[test]
    fn test_review_status_maps_to_user_status() {
        assert_eq!(
            DesignerApplicationStatus::from(ApplicationReviewStatus::Approved),
            DesignerApplicationStatus::Approved
        );
        assert_eq!(DesignerApplicationStatus::default(), DesignerApplicationStatus::None);
    }
}
