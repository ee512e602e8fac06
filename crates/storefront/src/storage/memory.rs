//! Process-local key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{KeyValueStore, StorageError};

/// An in-memory store.
///
/// Clones share the same map. The lock is held for a single get or set, so
/// read-modify-write cycles through [`Storage`](super::Storage) still race.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether no keys are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = InMemoryStore::new();
        let other = store.clone();

        store.set_item("k", "v".to_owned()).await.unwrap();
        assert_eq!(other.get_item("k").await.unwrap().as_deref(), Some("v"));

        other.remove_item("k").await.unwrap();
        assert!(store.is_empty().await);
    }
}
