pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{PlantService, ServiceError};
pub use domain::{NewPlant, Plant};
pub use infra::config::Config;
pub use storage::{MemoryPlantStore, PlantStore, PostgresPlantStore, StoreError};
