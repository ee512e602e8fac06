//! User account record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fontspace_core::{DesignerApplicationStatus, FontId, UserId};

/// A marketplace account.
///
/// The same shape is stored in the `users` collection and, as a snapshot, in
/// the `currentUser` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub join_date: NaiveDate,
    /// Denormalized list of uploaded font IDs.
    pub uploaded_fonts: Vec<FontId>,
    pub total_downloads: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_designer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer_application_status: Option<DesignerApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<UserSocialLinks>,
}

impl User {
    /// Create a fresh account with no uploads, downloads or profile fields.
    #[must_use]
    pub fn new(id: UserId, username: String, email: String, join_date: NaiveDate) -> Self {
        Self {
            id,
            username,
            email,
            join_date,
            uploaded_fonts: Vec::new(),
            total_downloads: 0,
            bio: None,
            website: None,
            avatar: None,
            title: None,
            location: None,
            verified: None,
            is_designer: None,
            designer_application_status: None,
            social_links: None,
        }
    }

    /// Whether the user has been approved as a designer.
    #[must_use]
    pub fn is_designer(&self) -> bool {
        self.is_designer.unwrap_or(false)
    }

    /// Whether `identifier` names this user, by email or by ID.
    #[must_use]
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.email == identifier || self.id.as_str() == identifier
    }
}

/// Social profile links shown on a user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSocialLinks {
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
