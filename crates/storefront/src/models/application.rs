//! Designer application record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fontspace_core::{ApplicationId, ApplicationReviewStatus, UserId};

/// A user's request to be granted designer privileges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignerApplication {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub display_name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    pub experience: String,
    pub motivation: String,
    #[serde(default)]
    pub social_links: ApplicationSocialLinks,
    pub application_date: NaiveDate,
    pub status: ApplicationReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
}

/// Social links submitted with an application.
///
/// Blank inputs are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dribbble: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behance: Option<String>,
}
