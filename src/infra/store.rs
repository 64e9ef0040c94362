//! Builds the record store selected by [`Config`].

use crate::infra::config::{Config, StoreBackend};
use crate::storage::{MemoryPlantStore, PlantStore, PostgresPlantStore};
use std::sync::Arc;

/// Connects to the configured store and makes sure its schema exists.
pub async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn PlantStore>> {
    match &config.store {
        StoreBackend::Postgres { database_url } => {
            let store = PostgresPlantStore::connect(database_url, config.max_connections).await?;
            store.ensure_schema().await?;
            tracing::info!(
                max_connections = config.max_connections,
                "connected to PostgreSQL plant store"
            );
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory plant store; records are lost on restart");
            Ok(Arc::new(MemoryPlantStore::new()))
        }
    }
}
