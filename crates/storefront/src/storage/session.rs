//! Per-client store kept in the HTTP session.

use tower_sessions::Session;

use super::{KeyValueStore, StorageError};

/// A store scoped to one client's session.
///
/// Each client sees only its own collections, the same way each browser has
/// its own local storage. Values are kept as JSON strings under the session
/// keys listed in [`keys`](super::keys).
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    /// Wrap a request's session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl KeyValueStore for SessionStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.session.get::<String>(key).await?)
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.session.insert(key, value).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.session.remove::<String>(key).await?;
        Ok(())
    }
}
