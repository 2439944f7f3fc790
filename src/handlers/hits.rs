use crate::error::{ApiError, ErrorResponse};
use crate::models::HitsResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use chrono::{SecondsFormat, Utc};

/// Greeting returned with every counted visit.
const MESSAGE: &str = "hi";

/// GET /api handler - Count a visit
///
/// Atomically increments the visit counter in Redis and returns the
/// post-increment value together with the current timestamp. The increment
/// happens exactly once per request; whether the response reaches the
/// caller does not affect the counter.
#[utoipa::path(
    get,
    path = routes::API,
    responses(
        (status = 200, description = "Visit counted", body = HitsResponse),
        (status = 500, description = "Redis error", body = ErrorResponse)
    ),
    tag = "hits"
)]
pub async fn hits_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HitsResponse>), ApiError> {
    let hits = state.redis_client.increment().await?;

    tracing::debug!("Counted visit number {}", hits);
    Ok((
        StatusCode::OK,
        Json(HitsResponse {
            message: MESSAGE.to_string(),
            hits,
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    ))
}
