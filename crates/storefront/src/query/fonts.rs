//! Font browsing.

use std::cmp::Reverse;
use std::str::FromStr;

use fontspace_core::{Category, ParseEnumError, PricingTier};

use super::SearchTerm;
use crate::models::Font;

/// Sort order for font listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSort {
    /// Most downloaded first.
    #[default]
    Downloads,
    /// Newest upload first.
    Date,
    /// Alphabetical by name, ignoring case.
    Name,
}

impl FromStr for FontSort {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "downloads" => Ok(Self::Downloads),
            "date" => Ok(Self::Date),
            "name" => Ok(Self::Name),
            other => Err(ParseEnumError::new("sort order", other)),
        }
    }
}

/// Browse filters and sort order for the font catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontQuery {
    /// Matched against name, designer and tags.
    pub search: SearchTerm,
    pub category: Option<Category>,
    pub pricing: Option<PricingTier>,
    pub featured_only: bool,
    pub trending_only: bool,
    pub sort: FontSort,
}

impl FontQuery {
    /// Whether `font` passes every filter.
    #[must_use]
    pub fn matches(&self, font: &Font) -> bool {
        self.category.is_none_or(|c| font.category == c)
            && self.pricing.is_none_or(|p| font.pricing_tier == p)
            && (!self.featured_only || font.featured)
            && (!self.trending_only || font.trending)
            && self.search.matches_any(
                [font.name.as_str(), font.designer.as_str()]
                    .into_iter()
                    .chain(font.tags.iter().map(String::as_str)),
            )
    }

    /// Filter and sort a catalog.
    #[must_use]
    pub fn apply(&self, fonts: Vec<Font>) -> Vec<Font> {
        let mut matched: Vec<Font> = fonts.into_iter().filter(|f| self.matches(f)).collect();
        match self.sort {
            FontSort::Downloads => matched.sort_by_key(|f| Reverse(f.downloads)),
            FontSort::Date => matched.sort_by_key(|f| Reverse(f.upload_date)),
            FontSort::Name => matched.sort_by_cached_key(|f| f.name.to_lowercase()),
        }
        matched
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::seed;

    fn names(fonts: &[Font]) -> Vec<&str> {
        fonts.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_default_sorts_by_downloads_descending() {
        let fonts = FontQuery::default().apply(seed::fonts());
        assert_eq!(fonts.len(), 4);
        assert!(fonts.windows(2).all(|w| w[0].downloads >= w[1].downloads));
        assert_eq!(fonts[0].name, "Crypto Icons");
    }

    #[test]
    fn test_pricing_filter_is_exact() {
        let query = FontQuery {
            pricing: Some(PricingTier::Free),
            ..FontQuery::default()
        };
        let fonts = query.apply(seed::fonts());
        assert_eq!(fonts.len(), 2);
        assert!(fonts.iter().all(|f| f.pricing_tier == PricingTier::Free));
    }

    #[test]
    fn test_category_filter() {
        let query = FontQuery {
            category: Some(Category::Serif),
            ..FontQuery::default()
        };
        assert_eq!(names(&query.apply(seed::fonts())), ["Holographic Serif"]);
    }

    #[test]
    fn test_search_covers_name_designer_and_tags() {
        let by_tag = FontQuery {
            search: SearchTerm::new(Some("BLOCKCHAIN")),
            ..FontQuery::default()
        };
        assert_eq!(names(&by_tag.apply(seed::fonts())), ["Crypto Icons"]);

        let by_designer = FontQuery {
            search: SearchTerm::new(Some("future type")),
            ..FontQuery::default()
        };
        assert_eq!(names(&by_designer.apply(seed::fonts())), ["Neon Dreams"]);
    }

    #[test]
    fn test_featured_and_trending_flags() {
        let query = FontQuery {
            featured_only: true,
            trending_only: true,
            ..FontQuery::default()
        };
        assert_eq!(
            names(&query.apply(seed::fonts())),
            ["Crypto Icons", "Cyber Grotesk"]
        );
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let query = FontQuery {
            sort: FontSort::Date,
            ..FontQuery::default()
        };
        assert_eq!(
            names(&query.apply(seed::fonts())),
            ["Cyber Grotesk", "Crypto Icons", "Neon Dreams", "Holographic Serif"]
        );
    }

    #[test]
    fn test_sort_by_name_ignores_case_and_is_stable() {
        let mut fonts = seed::fonts();
        fonts[0].name = "alpha".to_owned();
        fonts[1].name = "Alpha".to_owned();
        let query = FontQuery {
            sort: FontSort::Name,
            ..FontQuery::default()
        };
        let sorted = query.apply(fonts);
        assert_eq!(names(&sorted)[..2], ["alpha", "Alpha"]);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!("date".parse::<FontSort>().unwrap(), FontSort::Date);
        assert!("popularity".parse::<FontSort>().is_err());
    }
}
