//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits and a bounded
//! acquire timeout.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use super::DbError;
use crate::config::DbConfig;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a pooled connection before failing the query.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool sizing and timeout settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolSettings {
    fn options(&self) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Create a MySQL connection pool with default settings.
///
/// # Errors
///
/// Returns an error if the first connection fails.
///
/// # Example
///
/// ```ignore
/// let config = DbConfig::from_env()?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    create_pool_with_options(config, PoolSettings::default()).await
}

/// Create a MySQL connection pool with custom settings.
pub async fn create_pool_with_options(
    config: &DbConfig,
    settings: PoolSettings,
) -> Result<MySqlPool, sqlx::Error> {
    settings.options().connect_with(config.connect_options()).await
}

/// Connect eagerly, falling back to a lazy pool when the store is down.
///
/// A failed first connection is logged, not fatal: the lazy pool opens
/// connections on demand, so queries fail with an error until the store
/// becomes reachable and succeed afterwards.
pub async fn connect_or_lazy(config: &DbConfig, settings: PoolSettings) -> MySqlPool {
    match create_pool_with_options(config, settings).await {
        Ok(pool) => {
            tracing::info!(
                host = %config.host,
                port = config.port,
                database = %config.database,
                "Connected to database"
            );
            pool
        }
        Err(e) => {
            tracing::error!(
                host = %config.host,
                port = config.port,
                database = %config.database,
                error = %e,
                "Database connection failed; queries will retry on demand"
            );
            settings.options().connect_lazy_with(config.connect_options())
        }
    }
}

/// Run a trivial query to check the pool can reach the store.
pub async fn ping(pool: &MySqlPool) -> Result<(), DbError> {
    let (one,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;
    if one == 1 {
        Ok(())
    } else {
        Err(DbError::Unavailable(format!("unexpected ping result {}", one)))
    }
}
