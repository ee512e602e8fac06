//! Purchase operations.

use fontspace_core::UserId;

use super::{KeyValueStore, Storage, StorageError, keys, seed};
use crate::models::{Purchase, PurchaseWithFont};

impl<S: KeyValueStore> Storage<S> {
    /// All purchases, or the seed list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn get_purchases(&self) -> Result<Vec<Purchase>, StorageError> {
        self.load(keys::PURCHASES, seed::purchases).await
    }

    /// A user's purchases with each font joined in.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or an entry is corrupt.
    pub async fn get_user_purchases(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PurchaseWithFont>, StorageError> {
        let purchases = self.get_purchases().await?;
        let fonts = self.get_fonts().await?;

        Ok(purchases
            .into_iter()
            .filter(|p| &p.user_id == user_id)
            .map(|purchase| {
                let font = fonts.iter().find(|f| f.id == purchase.font_id).cloned();
                PurchaseWithFont { purchase, font }
            })
            .collect())
    }

    /// Append a purchase.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the entry is corrupt.
    pub async fn save_purchase(&self, purchase: Purchase) -> Result<(), StorageError> {
        tracing::info!(
            purchase_id = %purchase.id,
            user_id = %purchase.user_id,
            font_id = %purchase.font_id,
            "saving purchase"
        );
        self.append(keys::PURCHASES, seed::purchases, purchase).await
    }
}
