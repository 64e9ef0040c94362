use crate::domain::plant::Plant;
use crate::transport::http::handlers::{health, plants};
use crate::transport::http::types::{ApiResponse, AppState, CreatePlantRequest};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        plants::list_plants_handler,
        plants::show_plant_handler,
        plants::create_plant_handler
    ),
    components(schemas(ApiResponse, Plant, CreatePlantRequest))
)]
pub struct ApiDoc;

/// Routes only; no middleware.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/plants",
            get(plants::list_plants_handler).post(plants::create_plant_handler),
        )
        .route("/plants/:id", get(plants::show_plant_handler))
        .with_state(app_state)
}

/// The full application served by the binary: routes, Swagger UI, CORS and request tracing.
pub fn build_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
