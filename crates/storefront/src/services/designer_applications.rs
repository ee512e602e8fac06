//! Designer application submission.

use serde::Deserialize;
use thiserror::Error;

use fontspace_core::{ApplicationId, ApplicationReviewStatus, DesignerApplicationStatus};

use super::{non_blank, today};
use crate::models::{ApplicationSocialLinks, DesignerApplication, User};
use crate::storage::{KeyValueStore, Storage, StorageError};

/// Minimum bio length, in characters, counted before trimming.
pub const MIN_BIO_CHARS: usize = 50;

/// Application failures.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Display name is required")]
    MissingDisplayName,

    #[error("Bio must be at least 50 characters long")]
    BioTooShort,

    #[error("Please describe your typography experience")]
    MissingExperience,

    #[error("Please explain your motivation for joining")]
    MissingMotivation,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Submitted application form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    /// Defaults to the applicant's username when omitted.
    pub display_name: Option<String>,
    pub bio: String,
    pub website: Option<String>,
    pub portfolio: Option<String>,
    pub experience: String,
    pub motivation: String,
    pub social_links: ApplicationSocialLinks,
}

impl ApplicationForm {
    /// Validate the form and build a pending application.
    ///
    /// # Errors
    ///
    /// Returns the first failing validation as an `ApplicationError`.
    pub fn into_application(self, applicant: &User) -> Result<DesignerApplication, ApplicationError> {
        let display_name = self
            .display_name
            .unwrap_or_else(|| applicant.username.clone());
        if display_name.trim().is_empty() {
            return Err(ApplicationError::MissingDisplayName);
        }
        if self.bio.trim().is_empty() || self.bio.chars().count() < MIN_BIO_CHARS {
            return Err(ApplicationError::BioTooShort);
        }
        if self.experience.trim().is_empty() {
            return Err(ApplicationError::MissingExperience);
        }
        if self.motivation.trim().is_empty() {
            return Err(ApplicationError::MissingMotivation);
        }

        let links = self.social_links;
        Ok(DesignerApplication {
            id: ApplicationId::generate(),
            user_id: applicant.id.clone(),
            display_name: display_name.trim().to_owned(),
            bio: self.bio.trim().to_owned(),
            website: non_blank(self.website.as_deref()),
            portfolio: non_blank(self.portfolio.as_deref()),
            experience: self.experience.trim().to_owned(),
            motivation: self.motivation.trim().to_owned(),
            social_links: ApplicationSocialLinks {
                twitter: non_blank(links.twitter.as_deref()),
                instagram: non_blank(links.instagram.as_deref()),
                github: non_blank(links.github.as_deref()),
                dribbble: non_blank(links.dribbble.as_deref()),
                behance: non_blank(links.behance.as_deref()),
            },
            application_date: today(),
            status: ApplicationReviewStatus::Pending,
            review_date: None,
            review_notes: None,
        })
    }
}

/// Validate and store an application, marking the applicant as pending.
///
/// # Errors
///
/// Returns an `ApplicationError` for invalid forms or storage failures.
pub async fn submit_application<S: KeyValueStore>(
    storage: &Storage<S>,
    applicant: &User,
    form: ApplicationForm,
) -> Result<DesignerApplication, ApplicationError> {
    let application = form.into_application(applicant)?;
    storage.save_designer_application(application.clone()).await?;

    let mut user = storage
        .get_user_by_id(&applicant.id)
        .await?
        .unwrap_or_else(|| applicant.clone());
    user.designer_application_status = Some(DesignerApplicationStatus::Pending);
    storage.update_user(&user).await?;

    Ok(application)
}
