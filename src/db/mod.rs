//! Connection pool construction and the scoped transaction helpers.
//!
//! Every gateway operation runs through [`in_transaction`] or
//! [`in_write_transaction`], so a single request never observes half of a
//! write.

use std::str::FromStr;
use std::time::Duration;

use futures::future::BoxFuture;
use log::{debug, warn, LevelFilter};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::config::Config;
use crate::errors::ApiError;

/// Opens a write transaction holding the database's reserved lock up front.
const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

/// Open the pool described by `config`.
///
/// The database file is created when missing. Statement logging follows
/// `config.log_sql`.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_millis(config.database_busy_timeout_ms));
    let options = if config.log_sql {
        options.log_statements(LevelFilter::Info)
    } else {
        options.disable_statement_logging()
    };

    SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await
}

/// Run a read-only `body` inside a deferred transaction on a pooled
/// connection.
///
/// Commits when `body` returns `Ok`, rolls back and hands the error back
/// otherwise. The connection goes back to the pool on every path.
///
/// ```ignore
/// let user = in_transaction(&pool, move |conn| {
///     Box::pin(async move { UserRepository::find_by_id(conn, id).await })
/// })
/// .await?;
/// ```
pub async fn in_transaction<T, F>(pool: &SqlitePool, body: F) -> Result<T, ApiError>
where
    F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, ApiError>>,
{
    let tx = pool.begin().await?;
    run(tx, body).await
}

/// Like [`in_transaction`], but takes the write lock before `body` runs.
///
/// A deferred transaction that reads and then writes cannot upgrade its lock
/// while another one holds a shared lock, and SQLite fails it at once instead
/// of waiting. Starting with `BEGIN IMMEDIATE` makes concurrent writers queue
/// on the busy timeout.
pub async fn in_write_transaction<T, F>(pool: &SqlitePool, body: F) -> Result<T, ApiError>
where
    F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, ApiError>>,
{
    let tx = pool.begin_with(BEGIN_IMMEDIATE).await?;
    run(tx, body).await
}

async fn run<T, F>(mut tx: Transaction<'static, Sqlite>, body: F) -> Result<T, ApiError>
where
    F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, ApiError>>,
{
    match body(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            debug!("Rolling back transaction: {}", err);
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed: {}", rollback_err);
            }
            Err(err)
        }
    }
}

/// Single-connection in-memory pool with a fresh `users` table.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    use crate::config::SchemaMode;
    use crate::repositories::UserRepository;

    // One connection that never expires: each new in-memory connection
    // would otherwise see an empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    UserRepository::prepare_schema(&pool, SchemaMode::Create)
        .await
        .expect("schema");
    pool
}
