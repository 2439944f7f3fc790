mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod redis;
mod routes;
mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::redis::RedisClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("redis-hit-counter starting");

    let config = Arc::new(Config::from_env()?);
    config.log_startup();

    let redis_client = RedisClient::from_config(&config)?;
    redis_client.connect_in_background();

    let state = AppState {
        redis_client,
        config: config.clone(),
    };

    let app = Router::new()
        .route(routes::API, get(handlers::hits_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
