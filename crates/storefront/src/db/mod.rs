//! `PostgreSQL` connection for the session store.
//!
//! The only table is `tower_sessions.session`, owned by
//! `tower-sessions-sqlx-store`. Each session record holds one client's
//! marketplace collections (see [`crate::storage`]).
//!
//! # Migrations
//!
//! The session table is created via:
//! ```bash
//! cargo run -p fontspace-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
