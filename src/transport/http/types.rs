use crate::app::PlantService;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub plant_service: PlantService,
}

impl AppState {
    pub fn new(plant_service: PlantService) -> Self {
        Self { plant_service }
    }
}

/// Envelope used for health checks and failures. Plant payloads are rendered bare.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Documented shape of a create request.
///
/// Any JSON object is accepted; keys other than these are ignored, and every key is optional.
/// The same keys may also be passed as query parameters.
#[derive(Deserialize, Debug, ToSchema)]
pub struct CreatePlantRequest {
    /// Explicit id. Omit to let the store assign one.
    pub id: Option<i64>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub name: Option<String>,
}
