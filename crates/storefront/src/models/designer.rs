//! Designer profile record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fontspace_core::DesignerId;

/// A type designer or foundry.
///
/// `total_fonts` and `total_downloads` are stored values. They are not
/// derived from the font collection and may disagree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designer {
    pub id: DesignerId,
    pub name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub join_date: NaiveDate,
    pub total_fonts: u64,
    pub total_downloads: u64,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<DesignerSocialLinks>,
}

/// Social profile links shown on a designer page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignerSocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dribbble: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behance: Option<String>,
}
