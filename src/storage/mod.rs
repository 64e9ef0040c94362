//! Record store abstraction for plants and its implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryPlantStore;
pub use postgres::PostgresPlantStore;

use crate::domain::plant::{NewPlant, Plant};
use async_trait::async_trait;
use thiserror::Error;

/// Failures raised by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Any error reported by the database driver (connection loss, constraint violation, ...).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A client-supplied id collides with an existing record.
    #[error("a plant with id {0} already exists")]
    Conflict(i64),

    /// No store-assigned id is left above the highest id in use.
    #[error("plant ids exhausted")]
    IdsExhausted,
}

/// The persistence contract the plant service depends on.
///
/// Implementations own all persisted state; callers hold no state between requests.
#[async_trait]
pub trait PlantStore: Send + Sync {
    /// Persists a new plant and returns it with its id.
    async fn create(&self, plant: NewPlant) -> Result<Plant, StoreError>;

    /// Returns every plant, ordered by id.
    async fn list(&self) -> Result<Vec<Plant>, StoreError>;

    /// Returns the plant with the given id, or `None` if there is none.
    async fn find_by_id(&self, id: i64) -> Result<Option<Plant>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
