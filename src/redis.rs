use anyhow::{Context, Result};
use redis::{AsyncCommands, aio::ConnectionManager};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::Config;

/// Redis key holding the visit counter.
pub const HITS_KEY: &str = "hits";

/// Shareable Redis client for use across async handlers
#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
    connection: Arc<OnceCell<ConnectionManager>>,
}

impl RedisClient {
    /// Create a new Redis client from configuration
    ///
    /// This only parses the connection URL; no I/O happens here. The actual
    /// connection is established lazily, either by `connect_in_background`
    /// at startup or by the first request that needs it.
    pub fn from_config(config: &Config) -> Result<Self> {
        let url = config.redis_url();
        let client = redis::Client::open(url.as_str())
            .with_context(|| format!("Invalid Redis URL: {}", url))?;

        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
        })
    }

    /// Get the shared connection, establishing it on first use
    ///
    /// All requests reuse the same multiplexed connection for the lifetime
    /// of the process. If establishing it fails, the cell stays empty and
    /// the next caller tries again.
    async fn connection(&self) -> Result<ConnectionManager> {
        let connection = self
            .connection
            .get_or_try_init(|| ConnectionManager::new(self.client.clone()))
            .await
            .context("Failed to connect to Redis")?;

        Ok(connection.clone())
    }

    /// Start the initial connection attempt without blocking startup
    ///
    /// Failure is logged and otherwise ignored; the HTTP listener starts
    /// regardless, and endpoints fail individually until Redis is reachable.
    pub fn connect_in_background(&self) {
        let client = self.clone();
        tokio::spawn(async move {
            match client.connection().await {
                Ok(_) => tracing::info!("Connected to Redis"),
                Err(e) => tracing::error!("Redis connection failed at startup: {:#}", e),
            }
        });
    }

    /// Atomically increment the visit counter
    ///
    /// Redis initializes a missing key to zero before incrementing, so the
    /// first call returns 1. INCR is atomic on the server side; concurrent
    /// callers never observe the same value.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established or the
    /// INCR command fails
    pub async fn increment(&self) -> Result<i64> {
        let mut connection = self.connection().await?;

        let hits: i64 = connection
            .incr(HITS_KEY, 1)
            .await
            .context("Failed to increment hit counter")?;

        tracing::debug!("Hit counter incremented to {}", hits);
        Ok(hits)
    }

    /// Verify that the Redis server is reachable
    ///
    /// Round-trips a PING command without touching any data.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established or the
    /// PING command fails
    pub async fn ping(&self) -> Result<()> {
        let mut connection = self.connection().await?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut connection)
            .await
            .context("Failed to ping Redis")?;

        tracing::debug!("Redis ping succeeded");
        Ok(())
    }
}
