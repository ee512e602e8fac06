//! Designer application review.
//!
//! Works on any store: the JSON store file, or a client's session opened with
//! `--session` (see [`super::sessions`]). Reviewing an application also
//! updates the applicant's `designerApplicationStatus` and `isDesigner`
//! fields in that same store.

use fontspace_core::{ApplicationId, ApplicationReviewStatus};
use fontspace_storefront::storage::{KeyValueStore, Storage, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("application not found: {0}")]
    NotFound(ApplicationId),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Print applications, optionally filtered by status.
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be read.
pub async fn list<S: KeyValueStore>(
    storage: &Storage<S>,
    status: Option<ApplicationReviewStatus>,
) -> Result<(), StorageError> {
    let applications = storage.get_designer_applications().await?;

    #[allow(clippy::print_stdout)]
    {
        for application in applications
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
        {
            println!(
                "{:<38} {:<10} {:<10} {:<24} {}",
                application.id,
                application.status,
                application.application_date.to_string(),
                application.display_name,
                application.user_id,
            );
        }
    }
    Ok(())
}

/// Record a review decision.
///
/// # Errors
///
/// Returns `ReviewError::NotFound` for an unknown ID.
pub async fn review<S: KeyValueStore>(
    storage: &Storage<S>,
    id: &ApplicationId,
    decision: ApplicationReviewStatus,
    notes: Option<String>,
) -> Result<(), ReviewError> {
    let today = chrono::Utc::now().date_naive();
    let application = storage
        .review_designer_application(id, decision, notes, today)
        .await?
        .ok_or_else(|| ReviewError::NotFound(id.clone()))?;

    #[allow(clippy::print_stdout)]
    {
        println!(
            "Application {} from {} marked {}",
            application.id, application.display_name, application.status
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use fontspace_core::DesignerApplicationStatus;
    use fontspace_storefront::services::designer_applications::{
        ApplicationForm, submit_application,
    };
    use fontspace_storefront::storage::{SessionRecordStore, SessionStore};
    use tower_sessions::{MemoryStore, Session};

    use super::*;
    use crate::commands::{FileStorage, open_store};

    fn temp_store() -> FileStorage {
        let path = std::env::temp_dir().join(format!(
            "fontspace-cli-{}.json",
            ApplicationId::generate()
        ));
        open_store(path)
    }

    #[tokio::test]
    async fn test_review_approves_applicant() {
        let storage = temp_store();
        let applicant = storage
            .get_user_by_id(&"user1".into())
            .await
            .unwrap()
            .unwrap();
        let form = ApplicationForm {
            bio: "x".repeat(60),
            experience: "Lettering".to_owned(),
            motivation: "Publishing".to_owned(),
            ..ApplicationForm::default()
        };
        let application = submit_application(&storage, &applicant, form).await.unwrap();

        review(
            &storage,
            &application.id,
            ApplicationReviewStatus::Approved,
            None,
        )
        .await
        .unwrap();

        let user = storage
            .get_user_by_id(&"user1".into())
            .await
            .unwrap()
            .unwrap();
        assert!(user.is_designer());
        assert_eq!(
            user.designer_application_status,
            Some(DesignerApplicationStatus::Approved)
        );
        let _ = tokio::fs::remove_file(storage.store().path()).await;
    }

    #[tokio::test]
    async fn test_review_unknown_application() {
        let storage = temp_store();
        let err = review(
            &storage,
            &"missing".into(),
            ApplicationReviewStatus::Rejected,
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ReviewError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_review_application_submitted_in_client_session() {
        let backend = MemoryStore::default();
        let session = Session::new(None, Arc::new(backend.clone()), None);
        let client = Storage::new(SessionStore::new(session.clone()));
        let applicant = client
            .get_user_by_id(&"user1".into())
            .await
            .unwrap()
            .unwrap();
        let form = ApplicationForm {
            display_name: Some("Type Master".to_owned()),
            bio: "x".repeat(60),
            experience: "Lettering".to_owned(),
            motivation: "Publishing".to_owned(),
            ..ApplicationForm::default()
        };
        let application = submit_application(&client, &applicant, form).await.unwrap();
        session.save().await.unwrap();

        let record = SessionRecordStore::open(backend.clone(), &session.id().unwrap())
            .await
            .unwrap()
            .unwrap();
        let reviewer = Storage::new(record);
        review(
            &reviewer,
            &application.id,
            ApplicationReviewStatus::Rejected,
            Some("Portfolio needed".to_owned()),
        )
        .await
        .unwrap();

        let reopened = Session::new(session.id(), Arc::new(backend), None);
        let client = Storage::new(SessionStore::new(reopened));
        let user = client
            .get_user_by_id(&"user1".into())
            .await
            .unwrap()
            .unwrap();
        assert!(!user.is_designer());
        assert_eq!(
            user.designer_application_status,
            Some(DesignerApplicationStatus::Rejected)
        );
    }
}
