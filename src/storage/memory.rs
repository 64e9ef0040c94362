//! In-process plant store, used for local runs (`PLANT_STORE=memory`) and tests.

use crate::domain::plant::{NewPlant, Plant};
use crate::storage::{PlantStore, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    plants: BTreeMap<i64, Plant>,
    last_id: i64,
}

/// A plant store backed by an ordered map.
///
/// Store-assigned ids start at 1 and always exceed every id seen so far, including
/// client-supplied ones.
#[derive(Default)]
pub struct MemoryPlantStore {
    state: RwLock<MemoryState>,
}

impl MemoryPlantStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlantStore for MemoryPlantStore {
    async fn create(&self, plant: NewPlant) -> Result<Plant, StoreError> {
        let mut state = self.state.write().await;
        let id = match plant.id {
            Some(id) => id,
            None => state
                .last_id
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted)?,
        };
        if state.plants.contains_key(&id) {
            return Err(StoreError::Conflict(id));
        }
        state.last_id = state.last_id.max(id);

        let record = plant.into_plant(id);
        state.plants.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Plant>, StoreError> {
        let state = self.state.read().await;
        Ok(state.plants.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Plant>, StoreError> {
        let state = self.state.read().await;
        Ok(state.plants.get(&id).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
