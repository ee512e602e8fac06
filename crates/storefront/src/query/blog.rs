//! Blog listing, tag index and related posts.

use std::cmp::Reverse;

use super::SearchTerm;
use crate::models::BlogPost;

/// Search and tag filter for the blog index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogQuery {
    /// Matched against title, excerpt and tags.
    pub search: SearchTerm,
    /// Exact tag match.
    pub tag: Option<String>,
}

impl BlogQuery {
    #[must_use]
    pub fn matches(&self, post: &BlogPost) -> bool {
        self.tag
            .as_ref()
            .is_none_or(|tag| post.tags.iter().any(|t| t == tag))
            && self.search.matches_any(
                [post.title.as_str(), post.excerpt.as_str()]
                    .into_iter()
                    .chain(post.tags.iter().map(String::as_str)),
            )
    }

    /// Filter, then order featured posts first and newest first within each
    /// group.
    #[must_use]
    pub fn apply(&self, posts: Vec<BlogPost>) -> Vec<BlogPost> {
        let mut matched: Vec<BlogPost> = posts.into_iter().filter(|p| self.matches(p)).collect();
        matched.sort_by_key(|p| (Reverse(p.featured), Reverse(p.publish_date)));
        matched
    }
}

/// Distinct tags across `posts`, in order of first appearance.
#[must_use]
pub fn all_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|p| &p.tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Up to `limit` other posts sharing at least one tag with `post`.
#[must_use]
pub fn related_posts(post: &BlogPost, posts: &[BlogPost], limit: usize) -> Vec<BlogPost> {
    posts
        .iter()
        .filter(|p| p.id != post.id)
        .filter(|p| p.tags.iter().any(|t| post.tags.contains(t)))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed;

    fn slugs(posts: &[BlogPost]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_featured_first_then_newest() {
        let posts = BlogQuery::default().apply(seed::blog_posts());
        assert_eq!(
            slugs(&posts),
            [
                "future-typography-web3",
                "symbol-fonts-ultimate-guide",
                "neon-effects-display-fonts"
            ]
        );
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let query = BlogQuery {
            tag: Some("design".to_owned()),
            ..BlogQuery::default()
        };
        assert_eq!(
            slugs(&query.apply(seed::blog_posts())),
            ["future-typography-web3", "neon-effects-display-fonts"]
        );

        let partial = BlogQuery {
            tag: Some("desi".to_owned()),
            ..BlogQuery::default()
        };
        assert!(partial.apply(seed::blog_posts()).is_empty());
    }

    #[test]
    fn test_search_matches_excerpt() {
        let query = BlogQuery {
            search: SearchTerm::new(Some("CSS techniques")),
            ..BlogQuery::default()
        };
        assert_eq!(
            slugs(&query.apply(seed::blog_posts())),
            ["neon-effects-display-fonts"]
        );
    }

    #[test]
    fn test_all_tags_distinct_in_first_appearance_order() {
        let tags = all_tags(&seed::blog_posts());
        assert_eq!(&tags[..5], ["web3", "typography", "blockchain", "design", "css"]);
        assert_eq!(tags.iter().filter(|t| *t == "design").count(), 1);
    }

    #[test]
    fn test_related_posts_exclude_the_post_itself() {
        let posts = seed::blog_posts();
        let related = related_posts(&posts[0], &posts, 3);
        assert_eq!(slugs(&related), ["neon-effects-display-fonts"]);

        let none = related_posts(&posts[2], &posts, 3);
        assert!(none.is_empty());
    }
}
