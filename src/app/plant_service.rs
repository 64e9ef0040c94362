//! The plant record service.
//!
//! Every operation is a single passthrough to the injected [`PlantStore`]: no retries, no local
//! recovery, no state kept between calls.

use crate::domain::permit::new_plant_from_fields;
use crate::domain::plant::{parse_plant_id, Plant};
use crate::storage::{PlantStore, StoreError};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Lists, fetches and creates plants against a record store.
#[derive(Clone)]
pub struct PlantService {
    store: Arc<dyn PlantStore>,
}

impl PlantService {
    pub fn new(store: Arc<dyn PlantStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Plant>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Looks up a plant by the identifier exactly as the caller passed it.
    ///
    /// A missing record, or an identifier that cannot be an id at all, is `Ok(None)`.
    pub async fn fetch_by_id(&self, raw_id: &str) -> Result<Option<Plant>, ServiceError> {
        let Some(id) = parse_plant_id(raw_id) else {
            tracing::debug!(raw_id, "plant id is not an integer; nothing can match");
            return Ok(None);
        };
        Ok(self.store.find_by_id(id).await?)
    }

    /// Creates a plant from an arbitrary field mapping; unknown keys are discarded.
    pub async fn create(&self, fields: &Map<String, JsonValue>) -> Result<Plant, ServiceError> {
        let new_plant = new_plant_from_fields(fields);
        let plant = self.store.create(new_plant).await?;
        tracing::info!(id = plant.id, "plant created");
        Ok(plant)
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.store.ping().await?)
    }
}
