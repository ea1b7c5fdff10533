//! User service: the persistence gateway for `User`.

use async_trait::async_trait;
use log::{debug, info, warn};
use sqlx::SqlitePool;

use crate::db::{in_transaction, in_write_transaction};
use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::services::EntityGateway;

pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityGateway<User> for UserService {
    type Id = i64;

    async fn save(&self, user: User) -> Result<User, ApiError> {
        debug!("Saving user: {}", user.name);

        let user = in_write_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let id = UserRepository::insert(conn, &user).await?;
                Ok(User {
                    id: Some(id),
                    ..user
                })
            })
        })
        .await?;

        info!("Saved user with id: {:?}", user.id);
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by ID: {}", id);
        in_transaction(&self.pool, move |conn| {
            Box::pin(async move { UserRepository::find_by_id(conn, id).await })
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        let users = in_transaction(&self.pool, |conn| {
            Box::pin(async move { UserRepository::find_all(conn).await })
        })
        .await?;

        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    async fn update(&self, id: i64, patch: User) -> Result<User, ApiError> {
        info!("Updating user with id: {}", id);

        let updated = in_write_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let existing = UserRepository::find_by_id(&mut *conn, id)
                    .await?
                    .ok_or_else(|| {
                        warn!("Update failed: User not found with id: {}", id);
                        ApiError::user_not_found()
                    })?;

                let merged = User {
                    name: patch.name,
                    age: patch.age,
                    ..existing
                };
                UserRepository::update(&mut *conn, id, &merged).await?;
                Ok(merged)
            })
        })
        .await?;

        info!("Successfully updated user: {}", id);
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        info!("Deleting user with id: {}", id);

        in_write_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                if UserRepository::find_by_id(&mut *conn, id).await?.is_none() {
                    warn!("Delete failed: User not found with id: {}", id);
                    return Err(ApiError::user_not_found());
                }
                UserRepository::delete(&mut *conn, id).await?;
                Ok(())
            })
        })
        .await?;

        info!("Successfully deleted user: {}", id);
        Ok(())
    }
}
