//! User accounts and the current-user pointer.

use fontspace_core::UserId;

use super::{KeyValueStore, Storage, StorageError, keys, seed};
use crate::models::User;

impl<S: KeyValueStore> Storage<S> {
    /// All users, or the seed accounts.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_users(&self) -> Result<Vec<User>, StorageError> {
        self.load(keys::USERS, seed::users).await
    }

    /// Append a user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn save_user(&self, user: User) -> Result<(), StorageError> {
        tracing::info!(user_id = %user.id, "saving user");
        self.append(keys::USERS, seed::users, user).await
    }

    /// Find a user by login identifier (email address or user ID).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_user_by_email(&self, identifier: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .get_users()
            .await?
            .into_iter()
            .find(|u| u.matches_identifier(identifier)))
    }

    /// Find a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>, StorageError> {
        Ok(self.get_users().await?.into_iter().find(|u| &u.id == id))
    }

    /// Replace the stored record with the same ID.
    ///
    /// If `user` is also the current user, the current-user snapshot is
    /// refreshed. Returns `false` when no record matched.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn update_user(&self, user: &User) -> Result<bool, StorageError> {
        let mut users = self.get_users().await?;
        let mut found = false;
        for existing in users.iter_mut().filter(|u| u.id == user.id) {
            existing.clone_from(user);
            found = true;
        }
        self.write(keys::USERS, &users).await?;

        if let Some(current) = self.get_current_user().await?
            && current.id == user.id
        {
            self.set_current_user(Some(user)).await?;
        }

        Ok(found)
    }

    /// The logged-in user snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_current_user(&self) -> Result<Option<User>, StorageError> {
        match self.store.get_item(keys::CURRENT_USER).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    key: keys::CURRENT_USER.to_owned(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Store the logged-in user, or clear the pointer with `None`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails.
    pub async fn set_current_user(&self, user: Option<&User>) -> Result<(), StorageError> {
        match user {
            Some(user) => {
                let raw = serde_json::to_string(user).map_err(StorageError::Serialize)?;
                self.store.set_item(keys::CURRENT_USER, raw).await
            }
            None => self.store.remove_item(keys::CURRENT_USER).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::storage::InMemoryStore;

    fn new_user(id: &str, email: &str) -> User {
        User::new(
            id.into(),
            id.to_owned(),
            email.to_owned(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_get_user_by_email_matches_email_or_id() {
        let storage = Storage::new(InMemoryStore::new());

        let by_email = storage
            .get_user_by_email("typemaster@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id.as_str(), "user1");

        let by_id = storage.get_user_by_email("admin").await.unwrap().unwrap();
        assert_eq!(by_id.email, "admin@fontspace.web3");

        assert!(storage.get_user_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_user_appends() {
        let storage = Storage::new(InMemoryStore::new());
        storage.save_user(new_user("u9", "u9@example.com")).await.unwrap();

        let users = storage.get_users().await.unwrap();
        assert_eq!(users.len(), 3);
        assert!(storage.get_user_by_id(&"u9".into()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_current_user_set_and_clear() {
        let storage = Storage::new(InMemoryStore::new());
        assert!(storage.get_current_user().await.unwrap().is_none());

        let user = new_user("u1", "u1@example.com");
        storage.set_current_user(Some(&user)).await.unwrap();
        assert_eq!(storage.get_current_user().await.unwrap(), Some(user));

        storage.set_current_user(None).await.unwrap();
        assert!(storage.get_current_user().await.unwrap().is_none());
        assert!(storage.store().get_item(keys::CURRENT_USER).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_refreshes_current_snapshot() {
        let storage = Storage::new(InMemoryStore::new());
        let mut admin = storage.get_user_by_id(&"admin".into()).await.unwrap().unwrap();
        storage.set_current_user(Some(&admin)).await.unwrap();

        admin.bio = Some("Keeper of the catalog".to_owned());
        assert!(storage.update_user(&admin).await.unwrap());

        let stored = storage.get_user_by_id(&"admin".into()).await.unwrap().unwrap();
        assert_eq!(stored.bio.as_deref(), Some("Keeper of the catalog"));
        assert_eq!(storage.get_current_user().await.unwrap(), Some(admin));
    }

    #[tokio::test]
    async fn test_update_user_leaves_other_current_user_alone() {
        let storage = Storage::new(InMemoryStore::new());
        let current = storage.get_user_by_id(&"user1".into()).await.unwrap().unwrap();
        storage.set_current_user(Some(&current)).await.unwrap();

        let mut admin = storage.get_user_by_id(&"admin".into()).await.unwrap().unwrap();
        admin.verified = Some(true);
        storage.update_user(&admin).await.unwrap();

        assert_eq!(storage.get_current_user().await.unwrap(), Some(current));
    }

    #[tokio::test]
    async fn test_update_unknown_user_reports_false() {
        let storage = Storage::new(InMemoryStore::new());
        let ghost = new_user("ghost", "ghost@example.com");
        assert!(!storage.update_user(&ghost).await.unwrap());
    }
}
