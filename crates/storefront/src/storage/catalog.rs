//! Designer and blog operations (read-only collections).

use fontspace_core::DesignerId;

use super::{KeyValueStore, Storage, StorageError, keys, seed};
use crate::models::{BlogPost, Designer};

impl<S: KeyValueStore> Storage<S> {
    /// All designers, or the seed list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_designers(&self) -> Result<Vec<Designer>, StorageError> {
        self.load(keys::DESIGNERS, seed::designers).await
    }

    /// Find a designer by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_designer_by_id(
        &self,
        id: &DesignerId,
    ) -> Result<Option<Designer>, StorageError> {
        Ok(self.get_designers().await?.into_iter().find(|d| &d.id == id))
    }

    /// Find a designer by exact display name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_designer_by_name(&self, name: &str) -> Result<Option<Designer>, StorageError> {
        Ok(self.get_designers().await?.into_iter().find(|d| d.name == name))
    }

    /// All blog posts, or the seed list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_blog_posts(&self) -> Result<Vec<BlogPost>, StorageError> {
        self.load(keys::BLOG_POSTS, seed::blog_posts).await
    }

    /// Find a blog post by slug.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StorageError> {
        Ok(self.get_blog_posts().await?.into_iter().find(|p| p.slug == slug))
    }
}
