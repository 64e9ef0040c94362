pub mod plant_service;

pub use plant_service::{PlantService, ServiceError};
