use serde::{Deserialize, Serialize};

/// Response type for the counting endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HitsResponse {
    pub message: String,
    pub hits: i64,
    pub time: String,
}
