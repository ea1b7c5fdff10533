//! The create/read/update/delete contract handlers program against.

use async_trait::async_trait;

use crate::errors::ApiError;

/// Persistence operations over one entity type.
///
/// Implementations own the transaction boundary: each call commits fully or
/// not at all.
#[async_trait]
pub trait EntityGateway<T: Send + 'static>: Send + Sync {
    type Id: Send + Copy + 'static;

    /// Insert `entity` as a new row and return it with its generated id.
    async fn save(&self, entity: T) -> Result<T, ApiError>;

    async fn find_by_id(&self, id: Self::Id) -> Result<Option<T>, ApiError>;

    /// All rows, in store order.
    async fn find_all(&self) -> Result<Vec<T>, ApiError>;

    /// Overwrite the mutable fields of the row `id` with those of `patch`.
    ///
    /// Fails with `NotFound` when no such row exists.
    async fn update(&self, id: Self::Id, patch: T) -> Result<T, ApiError>;

    /// Fails with `NotFound` when no such row exists.
    async fn delete_by_id(&self, id: Self::Id) -> Result<(), ApiError>;
}
