//! CLI command implementations.

pub mod applications;
pub mod fonts;
pub mod migrate;
pub mod seed;
pub mod sessions;

use std::path::PathBuf;

use secrecy::SecretString;

use fontspace_storefront::storage::{JsonFileStore, Storage};

/// Storage over the CLI's JSON store file.
pub type FileStorage = Storage<JsonFileStore>;

/// Open the store file. Nothing is read until a command runs.
pub fn open_store(path: PathBuf) -> FileStorage {
    Storage::new(JsonFileStore::new(path))
}

/// The storefront database URL, read the same way the server reads it.
pub fn database_url() -> Option<SecretString> {
    let _ = dotenvy::dotenv();
    std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .filter(|url| !url.trim().is_empty())
        .map(SecretString::from)
}
