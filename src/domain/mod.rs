//! Domain types for plant records and the create-field allow-list.

pub mod permit;
pub mod plant;

pub use permit::{new_plant_from_fields, permit, PERMITTED_FIELDS};
pub use plant::{parse_plant_id, NewPlant, Plant};
