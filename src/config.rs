use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let redis_host = env::var("REDIS_HOST")
            .context("REDIS_HOST environment variable is required")?;

        let redis_port = env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid port number (0-65535)")?;

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            redis_host,
            redis_port,
            service_port,
            service_host,
        })
    }

    /// Connection URL for the Redis server.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis server: {}:{}", self.redis_host, self.redis_port);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn clear_env_vars() {
        unsafe {
            env::remove_var("REDIS_HOST");
            env::remove_var("REDIS_PORT");
            env::remove_var("PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("REDIS_HOST", "redis.internal");
            env::set_var("REDIS_PORT", "6380");
            env::set_var("PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.redis_host, "redis.internal");
        assert_eq!(config.redis_port, 6380);
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("REDIS_HOST", "localhost");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.redis_host, "localhost");
        assert_eq!(config.redis_port, 6379);
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_missing_redis_host() {
        let _guard = lock_env();
        clear_env_vars();

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("REDIS_HOST"));
    }

    #[test]
    fn test_invalid_listen_port() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("REDIS_HOST", "localhost");
            env::set_var("PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    fn test_redis_port_out_of_range() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("REDIS_HOST", "localhost");
            env::set_var("REDIS_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_redis_url_format() {
        let config = Config {
            redis_host: "cache.example.com".to_string(),
            redis_port: 6379,
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        assert_eq!(config.redis_url(), "redis://cache.example.com:6379");
    }
}
