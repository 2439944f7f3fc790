use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::HitsResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "redis-hit-counter API",
        version = "1.0.0",
        description = "A visit counter service backed by Redis"
    ),
    paths(handlers::hits::hits_handler, handlers::health::health_handler),
    components(schemas(HitsResponse, ErrorResponse)),
    tags(
        (name = "hits", description = "Visit counting operations"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
