//! Font catalog operations.

use fontspace_core::FontId;

use super::{KeyValueStore, Storage, StorageError, keys, seed};
use crate::models::Font;

impl<S: KeyValueStore> Storage<S> {
    /// All fonts, or the seed catalog if none were ever written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_fonts(&self) -> Result<Vec<Font>, StorageError> {
        self.load(keys::FONTS, seed::fonts).await
    }

    /// Append a font to the catalog.
    ///
    /// The ID is not checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn save_font(&self, font: Font) -> Result<(), StorageError> {
        tracing::info!(font_id = %font.id, name = %font.name, "saving font");
        self.append(keys::FONTS, seed::fonts, font).await
    }

    /// Find a font by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_font_by_id(&self, id: &FontId) -> Result<Option<Font>, StorageError> {
        Ok(self.get_fonts().await?.into_iter().find(|f| &f.id == id))
    }

    /// Increment the download counter of every font with this ID.
    ///
    /// The collection is rewritten even when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn update_font_downloads(&self, id: &FontId) -> Result<(), StorageError> {
        let mut fonts = self.get_fonts().await?;
        for font in fonts.iter_mut().filter(|f| &f.id == id) {
            font.downloads += 1;
        }
        self.write(keys::FONTS, &fonts).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::{DetachedStore, InMemoryStore};

    fn sample_font(id: &str) -> Font {
        let mut font = seed::fonts().remove(0);
        font.id = id.into();
        font.name = format!("Sample {id}");
        font.downloads = 0;
        font
    }

    #[tokio::test]
    async fn test_get_fonts_falls_back_to_seed() {
        let storage = Storage::new(InMemoryStore::new());
        assert_eq!(storage.get_fonts().await.unwrap(), seed::fonts());
        // Reading does not materialize the seed.
        assert!(storage.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_save_font_appends_exactly_one() {
        let storage = Storage::new(InMemoryStore::new());
        let before = storage.get_fonts().await.unwrap().len();

        storage.save_font(sample_font("new-font")).await.unwrap();

        let after = storage.get_fonts().await.unwrap();
        assert_eq!(after.len(), before + 1);
        assert!(after.iter().any(|f| f.id.as_str() == "new-font"));
    }

    #[tokio::test]
    async fn test_get_font_by_id() {
        let storage = Storage::new(InMemoryStore::new());
        let font = storage.get_font_by_id(&"3".into()).await.unwrap().unwrap();
        assert_eq!(font.name, "Holographic Serif");
        assert!(storage.get_font_by_id(&"404".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_downloads_touches_only_the_match() {
        let storage = Storage::new(InMemoryStore::new());
        let before = storage.get_fonts().await.unwrap();

        storage.update_font_downloads(&"2".into()).await.unwrap();

        let after = storage.get_fonts().await.unwrap();
        for (old, new) in before.iter().zip(&after) {
            if old.id.as_str() == "2" {
                assert_eq!(new.downloads, old.downloads + 1);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[tokio::test]
    async fn test_update_downloads_unknown_id_changes_nothing() {
        let storage = Storage::new(InMemoryStore::new());
        storage.update_font_downloads(&"nope".into()).await.unwrap();
        assert_eq!(storage.get_fonts().await.unwrap(), seed::fonts());
    }

    #[tokio::test]
    async fn test_detached_storage_serves_seed_and_drops_writes() {
        let storage = Storage::new(DetachedStore);
        storage.save_font(sample_font("lost")).await.unwrap();
        storage.update_font_downloads(&"1".into()).await.unwrap();
        assert_eq!(storage.get_fonts().await.unwrap(), seed::fonts());
    }
}
