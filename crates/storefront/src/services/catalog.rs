//! Downloads and purchases.

use thiserror::Error;

use fontspace_core::{FontId, PurchaseId};

use super::today;
use crate::models::{Font, Purchase, User};
use crate::storage::{KeyValueStore, Storage, StorageError};

/// Download and purchase failures.
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("font not found")]
    FontNotFound,

    /// Free and freemium fonts are downloaded, not bought.
    #[error("only premium fonts can be purchased")]
    NotForSale,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Count a download and return the updated font.
///
/// # Errors
///
/// Returns `PurchaseError::FontNotFound` for an unknown ID.
pub async fn download_font<S: KeyValueStore>(
    storage: &Storage<S>,
    id: &FontId,
) -> Result<Font, PurchaseError> {
    if storage.get_font_by_id(id).await?.is_none() {
        return Err(PurchaseError::FontNotFound);
    }
    storage.update_font_downloads(id).await?;
    storage
        .get_font_by_id(id)
        .await?
        .ok_or(PurchaseError::FontNotFound)
}

/// Record a purchase of a premium font at its listed price.
///
/// # Errors
///
/// Returns `PurchaseError::FontNotFound` for an unknown ID, or
/// `PurchaseError::NotForSale` if the font is not premium or has no price.
pub async fn purchase_font<S: KeyValueStore>(
    storage: &Storage<S>,
    buyer: &User,
    id: &FontId,
) -> Result<Purchase, PurchaseError> {
    let font = storage
        .get_font_by_id(id)
        .await?
        .ok_or(PurchaseError::FontNotFound)?;
    let amount = font
        .price
        .filter(|_| font.is_premium())
        .ok_or(PurchaseError::NotForSale)?;

    let purchase = Purchase {
        id: PurchaseId::generate(),
        user_id: buyer.id.clone(),
        font_id: font.id,
        amount,
        purchase_date: today(),
        public: true,
    };
    storage.save_purchase(purchase.clone()).await?;

    tracing::info!(
        purchase_id = %purchase.id,
        font_id = %purchase.font_id,
        amount = %purchase.amount,
        "font purchased"
    );
    Ok(purchase)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fontspace_core::Price;

    use super::*;
    use crate::storage::{InMemoryStore, seed};

    #[tokio::test]
    async fn test_download_increments_counter() {
        let storage = Storage::new(InMemoryStore::new());
        let font = download_font(&storage, &"2".into()).await.unwrap();
        assert_eq!(font.downloads, 891);
    }

    #[tokio::test]
    async fn test_download_unknown_font() {
        let storage = Storage::new(InMemoryStore::new());
        let err = download_font(&storage, &"nope".into()).await.unwrap_err();
        assert!(matches!(err, PurchaseError::FontNotFound));
    }

    #[tokio::test]
    async fn test_purchase_premium_font() {
        let storage = Storage::new(InMemoryStore::new());
        let buyer = seed::users().remove(0);

        let purchase = purchase_font(&storage, &buyer, &"3".into()).await.unwrap();
        assert_eq!(purchase.amount, Price::from_cents(2999));
        assert!(purchase.public);

        let owned = storage.get_user_purchases(&buyer.id).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].font.as_ref().unwrap().name, "Holographic Serif");
    }

    #[tokio::test]
    async fn test_free_font_is_not_for_sale() {
        let storage = Storage::new(InMemoryStore::new());
        let buyer = seed::users().remove(0);
        let err = purchase_font(&storage, &buyer, &"1".into()).await.unwrap_err();
        assert!(matches!(err, PurchaseError::NotForSale));
        assert_eq!(storage.get_purchases().await.unwrap().len(), 1);
    }
}
