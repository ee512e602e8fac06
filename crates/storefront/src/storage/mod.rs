//! Collection storage over a key-value store.
//!
//! # Layout
//!
//! Every collection lives under one key as a JSON-serialized array:
//!
//! | Key                    | Value                           |
//! |------------------------|---------------------------------|
//! | `fonts`                | `[Font]`                        |
//! | `designers`            | `[Designer]`                    |
//! | `blogPosts`            | `[BlogPost]`                    |
//! | `users`                | `[User]`                        |
//! | `purchases`            | `[Purchase]`                    |
//! | `designerApplications` | `[DesignerApplication]`         |
//! | `currentUser`          | `User` (absent when logged out) |
//!
//! A missing key reads as the built-in seed collection (see [`seed`]).
//!
//! # Writes
//!
//! Every write reads the whole collection, appends or maps, and writes the
//! whole collection back. There is no locking: two writers sharing a store
//! race and the last one wins.
//!
//! # Backends
//!
//! - [`SessionStore`] - per-client store kept in the HTTP session
//! - [`InMemoryStore`] - process-local map
//! - [`JsonFileStore`] - single JSON file, used by the CLI
//! - [`SessionRecordStore`] - one saved session record, opened by ID outside
//!   a request (the CLI reviews applications this way)
//! - [`DetachedStore`] - no backing store; reads miss, writes are dropped

mod applications;
mod catalog;
mod file;
mod fonts;
mod memory;
mod purchases;
mod record;
pub mod seed;
mod session;
mod users;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use record::SessionRecordStore;
pub use session::SessionStore;

/// Storage keys for each persisted collection.
pub mod keys {
    /// Key for the font catalog.
    pub const FONTS: &str = "fonts";

    /// Key for designer profiles.
    pub const DESIGNERS: &str = "designers";

    /// Key for blog posts.
    pub const BLOG_POSTS: &str = "blogPosts";

    /// Key for user accounts.
    pub const USERS: &str = "users";

    /// Key for purchases.
    pub const PURCHASES: &str = "purchases";

    /// Key for designer applications.
    pub const DESIGNER_APPLICATIONS: &str = "designerApplications";

    /// Key for the logged-in user snapshot.
    pub const CURRENT_USER: &str = "currentUser";
}

/// Errors from the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The session backing the store failed.
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Loading or saving a session record outside a request failed.
    #[error("session record error: {0}")]
    SessionRecord(#[from] tower_sessions::session_store::Error),

    /// Reading or writing the store file failed.
    #[error("file store error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored entry could not be parsed.
    #[error("corrupt entry '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A string-keyed store of string values.
///
/// Values are JSON documents produced by [`Storage`]; backends treat them as
/// opaque text.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// A store with no backing storage.
///
/// Reads always miss, so every collection reads as its seed, and writes are
/// silently discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedStore;

impl KeyValueStore for DetachedStore {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set_item(&self, key: &str, _value: String) -> Result<(), StorageError> {
        tracing::trace!(key, "detached store, write dropped");
        Ok(())
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Typed access to every collection in a [`KeyValueStore`].
///
/// Operations are grouped by collection in the submodules of this module.
#[derive(Debug, Clone, Default)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    /// Wrap a key-value store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Write every seed collection explicitly and clear the current user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails.
    pub async fn reset_to_seed(&self) -> Result<(), StorageError> {
        self.write(keys::FONTS, &seed::fonts()).await?;
        self.write(keys::DESIGNERS, &seed::designers()).await?;
        self.write(keys::BLOG_POSTS, &seed::blog_posts()).await?;
        self.write(keys::USERS, &seed::users()).await?;
        self.write(keys::PURCHASES, &seed::purchases()).await?;
        self.write(keys::DESIGNER_APPLICATIONS, &seed::designer_applications())
            .await?;
        self.set_current_user(None).await?;
        tracing::info!("store reset to seed data");
        Ok(())
    }

    /// Read a collection, falling back to `seed` when the key is absent.
    async fn load<T: DeserializeOwned>(
        &self,
        key: &str,
        seed: fn() -> Vec<T>,
    ) -> Result<Vec<T>, StorageError> {
        match self.store.get_item(key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: key.to_owned(),
                source,
            }),
            None => Ok(seed()),
        }
    }

    /// Overwrite a whole collection.
    async fn write<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items).map_err(StorageError::Serialize)?;
        self.store.set_item(key, raw).await?;
        tracing::debug!(key, len = items.len(), "collection written");
        Ok(())
    }

    /// Append one record by rewriting the whole collection.
    async fn append<T: Serialize + DeserializeOwned>(
        &self,
        key: &str,
        seed: fn() -> Vec<T>,
        item: T,
    ) -> Result<(), StorageError> {
        let mut items = self.load(key, seed).await?;
        items.push(item);
        self.write(key, &items).await
    }
}
