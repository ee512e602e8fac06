//! Authentication service.
//!
//! A mock: every account shares the password [`MOCK_PASSWORD`], nothing is
//! hashed and "logged in" means the `currentUser` entry is present in the
//! client's store.

mod error;

pub use error::AuthError;

use fontspace_core::UserId;

use super::today;
use crate::models::User;
use crate::storage::{KeyValueStore, Storage};

/// The password accepted for every account.
pub const MOCK_PASSWORD: &str = "password";

/// Authentication service.
///
/// Handles login, registration and the current-user pointer.
pub struct AuthService<'a, S> {
    storage: &'a Storage<S>,
}

impl<'a, S: KeyValueStore> AuthService<'a, S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(storage: &'a Storage<S>) -> Self {
        Self { storage }
    }

    /// Log in by email (or user ID) and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no user matches or the
    /// password is wrong.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .storage
            .get_user_by_email(identifier.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if password != MOCK_PASSWORD {
            tracing::debug!(user_id = %user.id, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        self.storage.set_current_user(Some(&user)).await?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(user)
    }

    /// Register a new account and log it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is blank.
    /// Returns `AuthError::UserAlreadyExists` if the email is already taken.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let (username, email) = (username.trim(), email.trim());
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        if self.storage.get_user_by_email(email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User::new(
            UserId::generate(),
            username.to_owned(),
            email.to_owned(),
            today(),
        );
        self.storage.save_user(user.clone()).await?;
        self.storage.set_current_user(Some(&user)).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Clear the current-user pointer.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the store fails.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.storage.set_current_user(None).await?;
        Ok(())
    }

    /// The logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the store fails or the entry is corrupt.
    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.storage.get_current_user().await?)
    }

    /// Whether a user is logged in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the store fails or the entry is corrupt.
    pub async fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self.current_user().await?.is_some())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    fn storage() -> Storage<InMemoryStore> {
        Storage::new(InMemoryStore::new())
    }

    #[tokio::test]
    async fn test_login_with_mock_password() {
        let storage = storage();
        let auth = AuthService::new(&storage);

        let user = auth
            .login("typemaster@example.com", MOCK_PASSWORD)
            .await
            .unwrap();
        assert_eq!(user.id.as_str(), "user1");
        assert!(auth.is_authenticated().await.unwrap());
        assert_eq!(auth.current_user().await.unwrap().unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_login_by_user_id() {
        let storage = storage();
        let auth = AuthService::new(&storage);
        let user = auth.login("admin", MOCK_PASSWORD).await.unwrap();
        assert_eq!(user.email, "admin@fontspace.web3");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let storage = storage();
        let auth = AuthService::new(&storage);

        let err = auth
            .login("typemaster@example.com", "hunter2")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!auth.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_user() {
        let storage = storage();
        let auth = AuthService::new(&storage);
        let err = auth.login("nobody@example.com", MOCK_PASSWORD).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_creates_and_logs_in() {
        let storage = storage();
        let auth = AuthService::new(&storage);

        let user = auth
            .register("Glyph", "glyph@example.com", "anything")
            .await
            .unwrap();
        assert_eq!(user.total_downloads, 0);
        assert!(user.uploaded_fonts.is_empty());
        assert_eq!(storage.get_users().await.unwrap().len(), 3);
        assert_eq!(auth.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_register_rejects_existing_email() {
        let storage = storage();
        let auth = AuthService::new(&storage);

        let err = auth
            .register("Again", "typemaster@example.com", "password")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(storage.get_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let storage = storage();
        let auth = AuthService::new(&storage);
        let err = auth.register("  ", "x@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingFields));
    }

    #[tokio::test]
    async fn test_logout_clears_pointer() {
        let storage = storage();
        let auth = AuthService::new(&storage);
        auth.login("admin", MOCK_PASSWORD).await.unwrap();

        auth.logout().await.unwrap();
        assert!(!auth.is_authenticated().await.unwrap());
        // Logging out twice is harmless.
        auth.logout().await.unwrap();
    }
}
