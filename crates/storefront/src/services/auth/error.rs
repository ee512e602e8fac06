//! Authentication error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown identifier or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A registration field was left blank.
    #[error("All fields are required")]
    MissingFields,

    /// The email is already registered.
    #[error("User already exists")]
    UserAlreadyExists,

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
