//! Font catalog listing.

use clap::Args;

use fontspace_core::{Category, PricingTier};
use fontspace_storefront::query::{FontQuery, FontSort, SearchTerm, parse_filter};
use fontspace_storefront::storage::StorageError;

use super::FileStorage;

/// Browse filters, mirroring `GET /api/fonts`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search name, designer and tags
    #[arg(short, long)]
    q: Option<String>,

    /// Category (`all` for any)
    #[arg(long)]
    category: Option<String>,

    /// Pricing tier (`all` for any)
    #[arg(long)]
    pricing: Option<String>,

    /// Only featured fonts
    #[arg(long)]
    featured: bool,

    /// Only trending fonts
    #[arg(long)]
    trending: bool,

    /// Sort order: downloads, date or name
    #[arg(long, default_value = "downloads")]
    sort: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Filter(#[from] fontspace_core::ParseEnumError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TryFrom<ListArgs> for FontQuery {
    type Error = fontspace_core::ParseEnumError;

    fn try_from(args: ListArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            search: SearchTerm::new(args.q.as_deref()),
            category: parse_filter::<Category>(args.category.as_deref())?,
            pricing: parse_filter::<PricingTier>(args.pricing.as_deref())?,
            featured_only: args.featured,
            trending_only: args.trending,
            sort: args.sort.parse::<FontSort>()?,
        })
    }
}

/// Print fonts matching `args`, one per line.
///
/// # Errors
///
/// Returns `ListError` for unknown filter values or storage failures.
pub async fn list(storage: &FileStorage, args: ListArgs) -> Result<(), ListError> {
    let query = FontQuery::try_from(args)?;
    let fonts = query.apply(storage.get_fonts().await?);

    #[allow(clippy::print_stdout)]
    {
        for font in &fonts {
            let price = font.price.map(|p| p.to_string()).unwrap_or_default();
            println!(
                "{:<38} {:<24} {:<12} {:<9} {:>8} {}",
                font.id, font.name, font.category, font.pricing_tier, font.downloads, price
            );
        }
        println!("{} font(s)", fonts.len());
    }
    Ok(())
}
