use crate::config::Config;
use crate::redis::RedisClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub redis_client: RedisClient,
    pub config: Arc<Config>,
}
