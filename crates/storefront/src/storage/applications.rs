//! Designer application operations.

use chrono::NaiveDate;

use fontspace_core::{ApplicationId, ApplicationReviewStatus, UserId};

use super::{KeyValueStore, Storage, StorageError, keys, seed};
use crate::models::DesignerApplication;

impl<S: KeyValueStore> Storage<S> {
    /// All designer applications (the seed is empty).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_designer_applications(
        &self,
    ) -> Result<Vec<DesignerApplication>, StorageError> {
        self.load(keys::DESIGNER_APPLICATIONS, seed::designer_applications)
            .await
    }

    /// Append an application.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn save_designer_application(
        &self,
        application: DesignerApplication,
    ) -> Result<(), StorageError> {
        tracing::info!(
            application_id = %application.id,
            user_id = %application.user_id,
            "saving designer application"
        );
        self.append(
            keys::DESIGNER_APPLICATIONS,
            seed::designer_applications,
            application,
        )
        .await
    }

    /// The most recently submitted application of a user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_user_designer_application(
        &self,
        user_id: &UserId,
    ) -> Result<Option<DesignerApplication>, StorageError> {
        Ok(self
            .get_designer_applications()
            .await?
            .into_iter()
            .rev()
            .find(|a| &a.user_id == user_id))
    }

    /// Record a review decision.
    ///
    /// Updates the application and mirrors the decision onto the applicant's
    /// `designerApplicationStatus` and `isDesigner` fields. Returns `None` if
    /// no application has this ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or an entry is corrupt.
    pub async fn review_designer_application(
        &self,
        id: &ApplicationId,
        decision: ApplicationReviewStatus,
        notes: Option<String>,
        reviewed_on: NaiveDate,
    ) -> Result<Option<DesignerApplication>, StorageError> {
        let mut applications = self.get_designer_applications().await?;
        let Some(application) = applications.iter_mut().find(|a| &a.id == id) else {
            return Ok(None);
        };

        application.status = decision;
        application.review_date = Some(reviewed_on);
        application.review_notes = notes;
        let reviewed = application.clone();
        self.write(keys::DESIGNER_APPLICATIONS, &applications).await?;

        if let Some(mut user) = self.get_user_by_id(&reviewed.user_id).await? {
            user.designer_application_status = Some(decision.into());
            user.is_designer = Some(decision == ApplicationReviewStatus::Approved);
            self.update_user(&user).await?;
        } else {
            tracing::warn!(user_id = %reviewed.user_id, "reviewed application has no user");
        }

        tracing::info!(application_id = %id, %decision, "designer application reviewed");
        Ok(Some(reviewed))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fontspace_core::DesignerApplicationStatus;

    use super::*;
    use crate::models::ApplicationSocialLinks;
    use crate::storage::InMemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    fn application(id: &str, user: &str) -> DesignerApplication {
        DesignerApplication {
            id: id.into(),
            user_id: user.into(),
            display_name: "Type Master".to_owned(),
            bio: "b".repeat(60),
            website: None,
            portfolio: None,
            experience: "Ten years of lettering".to_owned(),
            motivation: "Share my fonts".to_owned(),
            social_links: ApplicationSocialLinks::default(),
            application_date: day(1),
            status: ApplicationReviewStatus::Pending,
            review_date: None,
            review_notes: None,
        }
    }

    #[tokio::test]
    async fn test_no_applications_by_default() {
        let storage = Storage::new(InMemoryStore::new());
        assert!(storage.get_designer_applications().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_latest_application_wins() {
        let storage = Storage::new(InMemoryStore::new());
        storage.save_designer_application(application("a1", "user1")).await.unwrap();
        storage.save_designer_application(application("a2", "admin")).await.unwrap();
        storage.save_designer_application(application("a3", "user1")).await.unwrap();

        let latest = storage
            .get_user_designer_application(&"user1".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.id.as_str(), "a3");
    }

    #[tokio::test]
    async fn test_approval_updates_user() {
        let storage = Storage::new(InMemoryStore::new());
        storage.save_designer_application(application("a1", "user1")).await.unwrap();

        let reviewed = storage
            .review_designer_application(
                &"a1".into(),
                ApplicationReviewStatus::Approved,
                Some("Welcome".to_owned()),
                day(5),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reviewed.status, ApplicationReviewStatus::Approved);
        assert_eq!(reviewed.review_date, Some(day(5)));

        let user = storage.get_user_by_id(&"user1".into()).await.unwrap().unwrap();
        assert!(user.is_designer());
        assert_eq!(
            user.designer_application_status,
            Some(DesignerApplicationStatus::Approved)
        );
    }

    #[tokio::test]
    async fn test_rejection_keeps_user_non_designer() {
        let storage = Storage::new(InMemoryStore::new());
        storage.save_designer_application(application("a1", "user1")).await.unwrap();

        storage
            .review_designer_application(&"a1".into(), ApplicationReviewStatus::Rejected, None, day(5))
            .await
            .unwrap();

        let user = storage.get_user_by_id(&"user1".into()).await.unwrap().unwrap();
        assert!(!user.is_designer());
        assert_eq!(
            user.designer_application_status,
            Some(DesignerApplicationStatus::Rejected)
        );
    }

    #[tokio::test]
    async fn test_review_unknown_application() {
        let storage = Storage::new(InMemoryStore::new());
        let result = storage
            .review_designer_application(&"nope".into(), ApplicationReviewStatus::Approved, None, day(5))
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
