//! Connection pool ownership and schema initialization.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use super::CommentStore;
use crate::config::BoardConfig;
use crate::domain::{COMMENTS_TABLE, TableDescriptor};
use crate::error::BoardError;

/// How long a writer waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Owned handle to the SQLite database.
///
/// Opened once at startup by [`Database::open`], which also runs the
/// schema initializer. Cloning is cheap (the pool is reference counted);
/// [`Database::close`] releases every connection at shutdown.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if missing) the database named by
    /// `config.database_url` and ensures the `comments` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Initialization`] if the URL is invalid, the
    /// file cannot be opened, or the table cannot be created. Callers must
    /// treat this as fatal.
    pub async fn open(config: &BoardConfig) -> Result<Self, BoardError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| BoardError::Initialization(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections.max(1))
            .acquire_timeout(config.database_connect_timeout())
            .connect_with(options)
            .await
            .map_err(|e| BoardError::Initialization(format!("cannot open database: {e}")))?;

        ensure_schema(&pool, &COMMENTS_TABLE).await?;
        tracing::info!(url = %config.database_url, "database ready");

        Ok(Self { pool })
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// Uses a single connection that never expires, since every SQLite
    /// `:memory:` connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Initialization`] if SQLite cannot be opened.
    pub async fn in_memory() -> Result<Self, BoardError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| BoardError::Initialization(e.to_string()))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| BoardError::Initialization(e.to_string()))?;

        ensure_schema(&pool, &COMMENTS_TABLE).await?;
        Ok(Self { pool })
    }

    /// Returns a [`CommentStore`] sharing this database's pool.
    #[must_use]
    pub fn comment_store(&self) -> CommentStore {
        CommentStore::new(self.pool.clone())
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every connection and waits for them to be released.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database closed");
    }
}

/// Creates `table` if it does not already exist. Idempotent.
///
/// # Errors
///
/// Returns [`BoardError::Initialization`] if the DDL statement fails.
pub async fn ensure_schema(pool: &SqlitePool, table: &TableDescriptor) -> Result<(), BoardError> {
    let ddl = table.create_table_sql();
    sqlx::query(&ddl)
        .execute(pool)
        .await
        .map_err(|e| BoardError::Initialization(format!("create table {}: {e}", table.name)))?;
    tracing::debug!(table = table.name, "schema ensured");
    Ok(())
}
