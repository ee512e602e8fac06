//! Session table migration.
//!
//! # Usage
//!
//! ```bash
//! fontspace migrate
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string, falling back
//!   to `DATABASE_URL`
//!
//! The storefront never creates the table itself; run this once per database
//! before starting it with a database configured.

use thiserror::Error;
use tower_sessions_sqlx_store::PostgresStore;

use fontspace_storefront::db;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create the tower-sessions table.
///
/// # Errors
///
/// Returns `MigrationError` if no database is configured or the migration
/// fails.
pub async fn sessions() -> Result<(), MigrationError> {
    let database_url =
        super::database_url().ok_or(MigrationError::MissingEnvVar("STOREFRONT_DATABASE_URL"))?;

    tracing::info!("Connecting to storefront database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Creating session table...");
    PostgresStore::new(pool).migrate().await?;

    tracing::info!("Session table ready");
    Ok(())
}
