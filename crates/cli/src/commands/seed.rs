//! Write the seed catalog to a store file.
//!
//! ```bash
//! fontspace seed --store fontspace.json
//! ```
//!
//! Existing contents of the file are replaced. Reading a store that was never
//! seeded already yields the seed data, so this is only needed to get an
//! editable file or to discard local changes.

use fontspace_storefront::storage::StorageError;

use super::FileStorage;

/// Reset the store to the seed collections.
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be written.
pub async fn run(storage: &FileStorage) -> Result<(), StorageError> {
    storage.reset_to_seed().await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Seeded {}", storage.store().path().display());
    }
    Ok(())
}
