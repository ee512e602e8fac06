//! Single-file JSON store.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::sync::Mutex;

use super::{KeyValueStore, StorageError};

/// A store persisted as one JSON object file.
///
/// Each key maps to the parsed JSON document, so the file stays readable:
///
/// ```json
/// { "fonts": [ { "id": "1", "name": "Cyber Grotesk", ... } ] }
/// ```
///
/// A missing file reads as an empty store. Every write rewrites the file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, Value>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: self.path.display().to_string(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, entries: &BTreeMap<String, Value>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries).map_err(StorageError::Serialize)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_all().await?;
        Ok(entries.get(key).map(Value::to_string))
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let document: Value =
            serde_json::from_str(&value).map_err(|source| StorageError::Corrupt {
                key: key.to_owned(),
                source,
            })?;

        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(key.to_owned(), document);
        self.write_all(&entries).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        if entries.remove(key).is_some() {
            self.write_all(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fontspace-{name}-{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let store = JsonFileStore::new(temp_path("missing"));
        assert!(store.get_item("fonts").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let path = temp_path("roundtrip");
        let store = JsonFileStore::new(&path);

        store.set_item("users", r#"[{"id":"a"}]"#.to_owned()).await.unwrap();
        let raw = store.get_item("users").await.unwrap().unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], "a");

        // A second handle sees the persisted file.
        let reopened = JsonFileStore::new(&path);
        assert!(reopened.get_item("users").await.unwrap().is_some());

        store.remove_item("users").await.unwrap();
        assert!(reopened.get_item("users").await.unwrap().is_none());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_non_json_value() {
        let store = JsonFileStore::new(temp_path("bad"));
        let err = store.set_item("fonts", "not json".to_owned()).await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
