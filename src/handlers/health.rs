use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// Pings Redis to verify the store is reachable. Returns plain-text "OK"
/// if the ping round-trips, 500 with a plain-text failure message otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Redis is reachable", body = String, content_type = "text/plain"),
        (status = 500, description = "Redis is not reachable", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<&'static str, (StatusCode, &'static str)> {
    match state.redis_client.ping().await {
        Ok(_) => {
            tracing::debug!("Health check passed");
            Ok("OK")
        }
        Err(e) => {
            tracing::error!("Redis health error: {:#}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Redis not reachable"))
        }
    }
}
