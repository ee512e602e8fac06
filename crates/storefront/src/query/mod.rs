//! In-memory filtering, sorting and aggregation over stored collections.
//!
//! Every listing shares the same building blocks: a case-insensitive
//! substring [`SearchTerm`], equality filters parsed with [`parse_filter`],
//! and stable sorts, so records with equal sort keys keep their stored order.

mod blog;
mod designers;
mod fonts;
mod summary;

use std::str::FromStr;

pub use blog::{BlogQuery, all_tags, related_posts};
pub use designers::DesignerQuery;
pub use fonts::{FontQuery, FontSort};
pub use summary::{
    CategoryCount, DashboardView, DesignerDetail, DesignerStats, HomeSummary, ProfileStats,
    ProfileView, TierCount,
};

/// Filter value meaning "no filter".
pub const ALL: &str = "all";

/// A lower-cased search term. Blank input means "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(Option<String>);

impl SearchTerm {
    /// Build a term from raw user input.
    #[must_use]
    pub fn new(raw: Option<&str>) -> Self {
        Self(
            raw.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
        )
    }

    /// Whether the term is blank.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Whether any of `fields` contains the term, ignoring case.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        let Some(term) = &self.0 else {
            return true;
        };
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(term.as_str()))
    }
}

/// Parse an optional equality filter. Missing, blank and `"all"` mean no filter.
///
/// # Errors
///
/// Returns the parse error of `T` for any other unrecognized value.
pub fn parse_filter<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, T::Err> {
    match raw.map(str::trim) {
        None | Some("" | ALL) => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fontspace_core::PricingTier;

    use super::*;

    #[test]
    fn test_search_term_ignores_case_and_blank() {
        let term = SearchTerm::new(Some("  NEON "));
        assert!(term.matches_any(["Neon Dreams"]));
        assert!(!term.matches_any(["Cyber Grotesk", "tech"]));

        let blank = SearchTerm::new(Some("   "));
        assert!(blank.is_empty());
        assert!(blank.matches_any(std::iter::empty()));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter::<PricingTier>(None).unwrap(), None);
        assert_eq!(parse_filter::<PricingTier>(Some("all")).unwrap(), None);
        assert_eq!(
            parse_filter::<PricingTier>(Some("free")).unwrap(),
            Some(PricingTier::Free)
        );
        assert!(parse_filter::<PricingTier>(Some("cheap")).is_err());
    }
}
