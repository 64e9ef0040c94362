use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted plant record.
///
/// This is the only shape ever rendered to clients: `id`, `image`, `price` and `name`, with
/// absent values serialized as `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Plant {
    /// Store-assigned (or client-supplied) identifier.
    pub id: i64,
    /// Image reference, usually a URL.
    pub image: Option<String>,
    pub price: Option<f64>,
    pub name: Option<String>,
}

/// Fields accepted by the store when creating a plant.
///
/// `id` is optional: when `None` the store assigns one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPlant {
    pub id: Option<i64>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub name: Option<String>,
}

impl NewPlant {
    /// Builds the record the store will hold once `id` is known.
    pub fn into_plant(self, id: i64) -> Plant {
        Plant {
            id,
            image: self.image,
            price: self.price,
            name: self.name,
        }
    }
}

/// Interprets a raw path identifier as a plant id.
///
/// Anything that is not an integer cannot match a record, so it maps to `None` rather than an
/// error.
pub fn parse_plant_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
