use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// Custom error type for API endpoints
///
/// The service recognizes exactly one failure kind: a Redis operation that
/// did not complete. It is surfaced as a 500 with a JSON payload carrying a
/// generic label and the underlying failure description.
#[derive(Debug)]
pub enum ApiError {
    /// Redis connection or command error
    Redis(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Redis(err) => {
                tracing::error!("Redis error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Redis error".to_string(),
                        details: format!("{:#}", err),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Redis(err)
    }
}
