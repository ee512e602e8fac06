//! Client sessions in the storefront database.
//!
//! Every client's collections live in its session record, including the
//! designer applications it submitted. Reviewing one of those applications
//! means opening that session by ID:
//!
//! ```bash
//! fontspace sessions
//! fontspace applications --session <SESSION_ID> review <id> --decision approved
//! ```

use sqlx::PgPool;
use thiserror::Error;
use tower_sessions::session::Id;
use tower_sessions_sqlx_store::PostgresStore;

use fontspace_core::ApplicationReviewStatus;
use fontspace_storefront::db;
use fontspace_storefront::storage::{KeyValueStore, SessionRecordStore, Storage, StorageError};

/// Storage over one session record in `PostgreSQL`.
pub type SessionStorage = Storage<SessionRecordStore<PostgresStore>>;

/// Sessions that have not expired, as stored by `tower-sessions-sqlx-store`.
const ACTIVE_SESSIONS: &str =
    r#"select id from "tower_sessions"."session" where expiry_date > now()"#;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing environment variable: STOREFRONT_DATABASE_URL")]
    MissingDatabaseUrl,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid session id: {0}")]
    InvalidId(String),

    #[error("session not found or expired: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

async fn connect() -> Result<PgPool, SessionError> {
    let url = super::database_url().ok_or(SessionError::MissingDatabaseUrl)?;
    Ok(db::create_pool(&url).await?)
}

/// Parse a session ID as printed by `fontspace sessions`.
///
/// # Errors
///
/// Returns `SessionError::InvalidId` for malformed input.
pub fn parse_id(raw: &str) -> Result<Id, SessionError> {
    raw.trim()
        .parse()
        .map_err(|_| SessionError::InvalidId(raw.to_owned()))
}

/// Open one client's session for reading and writing.
///
/// # Errors
///
/// Returns `SessionError` if the ID is malformed, the database is unreachable
/// or the session does not exist.
pub async fn open(raw_id: &str) -> Result<SessionStorage, SessionError> {
    let id = parse_id(raw_id)?;
    let pool = connect().await?;
    SessionRecordStore::open(PostgresStore::new(pool), &id)
        .await?
        .map(Storage::new)
        .ok_or_else(|| SessionError::NotFound(raw_id.to_owned()))
}

/// Display names of applicants still awaiting review.
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be read.
pub async fn pending_applicants<S: KeyValueStore>(
    storage: &Storage<S>,
) -> Result<Vec<String>, StorageError> {
    Ok(storage
        .get_designer_applications()
        .await?
        .into_iter()
        .filter(|a| a.status == ApplicationReviewStatus::Pending)
        .map(|a| a.display_name)
        .collect())
}

/// Print every active session that holds pending applications.
///
/// # Errors
///
/// Returns `SessionError` if the database cannot be queried.
pub async fn list_pending() -> Result<(), SessionError> {
    let pool = connect().await?;
    let ids: Vec<String> = sqlx::query_scalar(ACTIVE_SESSIONS)
        .fetch_all(&pool)
        .await?;
    let backend = PostgresStore::new(pool);
    tracing::info!(sessions = ids.len(), "scanning sessions");

    for raw in ids {
        let Ok(id) = parse_id(&raw) else {
            tracing::warn!(session_id = %raw, "skipping unparsable session id");
            continue;
        };
        let Some(record) = SessionRecordStore::open(backend.clone(), &id).await? else {
            continue;
        };
        let pending = pending_applicants(&Storage::new(record)).await?;
        if pending.is_empty() {
            continue;
        }

        #[allow(clippy::print_stdout)]
        {
            println!("{raw:<24} {:>3} pending  {}", pending.len(), pending.join(", "));
        }
    }
    Ok(())
}
