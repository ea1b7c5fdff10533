//! User repository for all SQL statements touching the `users` table.

use log::{debug, info};
use sqlx::{SqliteConnection, SqlitePool};

use crate::config::SchemaMode;
use crate::constants::{CODE_DATABASE_ERROR, ERR_SCHEMA_MISSING, TABLE_USERS};
use crate::errors::ApiError;
use crate::models::User;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL
)";

const DROP_TABLE: &str = "DROP TABLE IF EXISTS users";

/// Stateless access to the `users` table.
pub struct UserRepository;

impl UserRepository {
    /// Prepare the table according to `mode`.
    ///
    /// Called once during start-up, before the server accepts requests.
    pub async fn prepare_schema(pool: &SqlitePool, mode: SchemaMode) -> Result<(), ApiError> {
        info!("Preparing '{}' table (schema mode: {})", TABLE_USERS, mode);

        match mode {
            SchemaMode::Create | SchemaMode::CreateDrop => {
                sqlx::query(DROP_TABLE).execute(pool).await?;
                sqlx::query(CREATE_TABLE).execute(pool).await?;
            }
            SchemaMode::Update => {
                sqlx::query(CREATE_TABLE).execute(pool).await?;
            }
            SchemaMode::Validate => {
                let exists: Option<(String,)> = sqlx::query_as(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
                )
                .bind(TABLE_USERS)
                .fetch_optional(pool)
                .await?;

                if exists.is_none() {
                    return Err(ApiError::internal(CODE_DATABASE_ERROR, ERR_SCHEMA_MISSING));
                }
            }
            SchemaMode::None => {}
        }

        info!("Table '{}' ready", TABLE_USERS);
        Ok(())
    }

    /// Undo start-up preparation on graceful shutdown.
    ///
    /// Only `create-drop` drops the table; every other mode leaves it alone.
    pub async fn finish_schema(pool: &SqlitePool, mode: SchemaMode) -> Result<(), ApiError> {
        if mode.drops_on_shutdown() {
            Self::drop_schema(pool).await?;
        }
        Ok(())
    }

    pub async fn drop_schema(pool: &SqlitePool) -> Result<(), ApiError> {
        info!("Dropping '{}' table", TABLE_USERS);
        sqlx::query(DROP_TABLE).execute(pool).await?;
        Ok(())
    }

    /// Insert a new row and return the generated id.
    pub async fn insert(conn: &mut SqliteConnection, user: &User) -> Result<i64, ApiError> {
        let result = sqlx::query("INSERT INTO users (name, age) VALUES (?, ?)")
            .bind(&user.name)
            .bind(user.age)
            .execute(conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(
            sqlx::query_as::<_, User>("SELECT id, name, age FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(conn)
                .await?,
        )
    }

    /// Every row, in whatever order the store yields them.
    pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Finding all users");
        Ok(sqlx::query_as::<_, User>("SELECT id, name, age FROM users")
            .fetch_all(conn)
            .await?)
    }

    /// Write name and age of a persisted user. Returns the affected row count.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        user: &User,
    ) -> Result<u64, ApiError> {
        let result = sqlx::query("UPDATE users SET name = ?, age = ? WHERE id = ?")
            .bind(&user.name)
            .bind(user.age)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a row by id. Returns the affected row count.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
