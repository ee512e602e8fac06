//! Page-level aggregates: home page, designer page, profile and dashboard.

use serde::Serialize;

use fontspace_core::{Category, Price, PricingTier, UserId};

use crate::models::{Designer, DesignerApplication, Font, PurchaseWithFont, User};

const HOME_FEATURED: usize = 3;
const HOME_TRENDING: usize = 6;

/// Number of fonts in one pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub tier: PricingTier,
    pub count: usize,
}

/// Number of fonts in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Home page data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummary {
    pub featured: Vec<Font>,
    pub trending: Vec<Font>,
    pub total_fonts: usize,
    pub tier_counts: Vec<TierCount>,
    pub category_counts: Vec<CategoryCount>,
}

impl HomeSummary {
    /// Summarize a catalog in stored order.
    #[must_use]
    pub fn build(fonts: &[Font]) -> Self {
        let pick = |keep: fn(&Font) -> bool, limit: usize| -> Vec<Font> {
            fonts.iter().filter(|f| keep(f)).take(limit).cloned().collect()
        };

        Self {
            featured: pick(|f| f.featured, HOME_FEATURED),
            trending: pick(|f| f.trending, HOME_TRENDING),
            total_fonts: fonts.len(),
            tier_counts: PricingTier::ALL
                .into_iter()
                .map(|tier| TierCount {
                    tier,
                    count: fonts.iter().filter(|f| f.pricing_tier == tier).count(),
                })
                .collect(),
            category_counts: Category::ALL
                .into_iter()
                .map(|category| CategoryCount {
                    category,
                    count: fonts.iter().filter(|f| f.category == category).count(),
                })
                .collect(),
        }
    }
}

/// Counts derived from the font collection for one designer.
///
/// Shown next to the stored `totalFonts` / `totalDownloads`, which are never
/// recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignerStats {
    pub catalog_fonts: usize,
    pub catalog_downloads: u64,
}

/// Designer page data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignerDetail {
    pub designer: Designer,
    /// Fonts whose `designer` field equals the designer's name.
    pub fonts: Vec<Font>,
    pub stats: DesignerStats,
}

impl DesignerDetail {
    #[must_use]
    pub fn build(designer: Designer, catalog: &[Font]) -> Self {
        let fonts: Vec<Font> = catalog
            .iter()
            .filter(|f| f.designer == designer.name)
            .cloned()
            .collect();
        let stats = DesignerStats {
            catalog_fonts: fonts.len(),
            catalog_downloads: fonts.iter().map(|f| f.downloads).sum(),
        };
        Self {
            designer,
            fonts,
            stats,
        }
    }
}

/// Headline numbers on a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub fonts_uploaded: usize,
    pub total_downloads: u64,
    pub featured_fonts: usize,
    pub fonts_purchased: usize,
    pub total_spent: Price,
}

/// Public profile page data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user: User,
    pub is_own_profile: bool,
    pub fonts: Vec<Font>,
    pub purchases: Vec<PurchaseWithFont>,
    pub stats: ProfileStats,
}

impl ProfileView {
    /// Build the profile of `user` as seen by `viewer`.
    ///
    /// Other viewers only see public purchases, and the purchase stats cover
    /// only what they can see.
    #[must_use]
    pub fn build(
        user: User,
        catalog: &[Font],
        purchases: Vec<PurchaseWithFont>,
        viewer: Option<&UserId>,
    ) -> Self {
        let is_own_profile = viewer == Some(&user.id);
        let fonts = uploaded_by(catalog, &user.id);
        let purchases: Vec<PurchaseWithFont> = purchases
            .into_iter()
            .filter(|p| is_own_profile || p.purchase.public)
            .collect();

        let stats = ProfileStats {
            fonts_uploaded: fonts.len(),
            total_downloads: fonts.iter().map(|f| f.downloads).sum(),
            featured_fonts: fonts.iter().filter(|f| f.featured).count(),
            fonts_purchased: purchases.len(),
            total_spent: purchases.iter().map(|p| p.purchase.amount).sum(),
        };

        Self {
            user,
            is_own_profile,
            fonts,
            purchases,
            stats,
        }
    }
}

/// Signed-in user's dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user: User,
    /// Uploaded fonts, listed only for approved designers.
    pub fonts: Vec<Font>,
    pub total_downloads: u64,
    pub featured_fonts: usize,
    /// Categories of `fonts` in first-appearance order, empty ones omitted.
    pub category_breakdown: Vec<CategoryCount>,
    pub purchases: Vec<PurchaseWithFont>,
    pub fonts_purchased: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<DesignerApplication>,
}

impl DashboardView {
    #[must_use]
    pub fn build(
        user: User,
        catalog: &[Font],
        purchases: Vec<PurchaseWithFont>,
        application: Option<DesignerApplication>,
    ) -> Self {
        let fonts = if user.is_designer() {
            uploaded_by(catalog, &user.id)
        } else {
            Vec::new()
        };
        Self {
            total_downloads: fonts.iter().map(|f| f.downloads).sum(),
            featured_fonts: fonts.iter().filter(|f| f.featured).count(),
            category_breakdown: category_breakdown(&fonts),
            fonts_purchased: purchases.len(),
            user,
            fonts,
            purchases,
            application,
        }
    }
}

fn category_breakdown(fonts: &[Font]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for font in fonts {
        match counts.iter_mut().find(|c| c.category == font.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: font.category,
                count: 1,
            }),
        }
    }
    counts
}

fn uploaded_by(catalog: &[Font], user: &UserId) -> Vec<Font> {
    catalog
        .iter()
        .filter(|f| &f.uploaded_by == user)
        .cloned()
        .collect()
}
