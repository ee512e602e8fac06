//! A saved session record, opened by ID outside of any request.

use tokio::sync::Mutex;
use tower_sessions::SessionStore as SessionBackend;
use tower_sessions::session::{Id, Record};

use super::{KeyValueStore, StorageError};

/// One client's collections, read straight from the session backend.
///
/// Values are held in the record the same way [`SessionStore`] writes them
/// through a live `Session`. Every write saves the whole record back, so a
/// client request racing with it follows the usual last-writer-wins rule.
///
/// [`SessionStore`]: super::SessionStore
#[derive(Debug)]
pub struct SessionRecordStore<B> {
    backend: B,
    record: Mutex<Record>,
}

impl<B: SessionBackend> SessionRecordStore<B> {
    /// Load the record for `id`. Returns `None` if it is missing or expired.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::SessionRecord` if the backend fails.
    pub async fn open(backend: B, id: &Id) -> Result<Option<Self>, StorageError> {
        Ok(backend.load(id).await?.map(|record| Self {
            backend,
            record: Mutex::new(record),
        }))
    }

    /// The session ID this store was opened with.
    pub async fn id(&self) -> Id {
        self.record.lock().await.id
    }
}

impl<B: SessionBackend> KeyValueStore for SessionRecordStore<B> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let record = self.record.lock().await;
        record
            .data
            .get(key)
            .map(|value| {
                serde_json::from_value::<String>(value.clone()).map_err(|source| {
                    StorageError::Corrupt {
                        key: key.to_owned(),
                        source,
                    }
                })
            })
            .transpose()
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut record = self.record.lock().await;
        record
            .data
            .insert(key.to_owned(), serde_json::Value::String(value));
        self.backend.save(&record).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut record = self.record.lock().await;
        if record.data.remove(key).is_some() {
            self.backend.save(&record).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use fontspace_core::{ApplicationReviewStatus, DesignerApplicationStatus};
    use tower_sessions::{MemoryStore, Session};

    use super::*;
    use crate::services::designer_applications::{ApplicationForm, submit_application};
    use crate::storage::{SessionStore, Storage};

    fn client(backend: &MemoryStore, id: Option<Id>) -> (Session, Storage<SessionStore>) {
        let session = Session::new(id, Arc::new(backend.clone()), None);
        (session.clone(), Storage::new(SessionStore::new(session)))
    }

    #[tokio::test]
    async fn test_review_reaches_application_saved_by_client() {
        let backend = MemoryStore::default();

        let (session, storage) = client(&backend, None);
        let applicant = storage
            .get_user_by_id(&"user1".into())
            .await
            .unwrap()
            .unwrap();
        storage.set_current_user(Some(&applicant)).await.unwrap();
        let form = ApplicationForm {
            bio: "x".repeat(60),
            experience: "Lettering".to_owned(),
            motivation: "Publishing".to_owned(),
            ..ApplicationForm::default()
        };
        let application = submit_application(&storage, &applicant, form)
            .await
            .unwrap();
        session.save().await.unwrap();
        let id = session.id().unwrap();

        let record = SessionRecordStore::open(backend.clone(), &id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.id().await, id);
        let reviewer = Storage::new(record);
        let reviewed = reviewer
            .review_designer_application(
                &application.id,
                ApplicationReviewStatus::Approved,
                Some("Welcome".to_owned()),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reviewed.status, ApplicationReviewStatus::Approved);

        let (_, storage) = client(&backend, Some(id));
        let current = storage.get_current_user().await.unwrap().unwrap();
        assert!(current.is_designer());
        assert_eq!(
            current.designer_application_status,
            Some(DesignerApplicationStatus::Approved)
        );
        let stored = storage
            .get_user_designer_application(&current.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.review_notes.as_deref(), Some("Welcome"));
    }

    #[tokio::test]
    async fn test_open_unknown_session() {
        let missing = SessionRecordStore::open(MemoryStore::default(), &Id::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
