//! Designer directory listing.

use std::cmp::Reverse;

use super::SearchTerm;
use crate::models::Designer;

/// Search for the designer directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignerQuery {
    /// Matched against name and bio.
    pub search: SearchTerm,
}

impl DesignerQuery {
    #[must_use]
    pub fn matches(&self, designer: &Designer) -> bool {
        self.search
            .matches_any([designer.name.as_str(), designer.bio.as_str()])
    }

    /// Filter, then order featured designers first and by downloads within
    /// each group.
    #[must_use]
    pub fn apply(&self, designers: Vec<Designer>) -> Vec<Designer> {
        let mut matched: Vec<Designer> =
            designers.into_iter().filter(|d| self.matches(d)).collect();
        matched.sort_by_key(|d| (Reverse(d.featured), Reverse(d.total_downloads)));
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed;

    #[test]
    fn test_featured_first_then_downloads() {
        let designers = DesignerQuery::default().apply(seed::designers());
        let names: Vec<_> = designers.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Digital Studio", "Future Type", "Quantum Design"]);
    }

    #[test]
    fn test_search_matches_bio() {
        let query = DesignerQuery {
            search: SearchTerm::new(Some("quantum physics")),
        };
        let designers = query.apply(seed::designers());
        assert_eq!(designers.len(), 1);
        assert_eq!(designers[0].name, "Quantum Design");
    }
}
