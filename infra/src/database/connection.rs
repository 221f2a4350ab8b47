//! Database connection pool management

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;
use tracing::info;

use kl_shared::config::DatabaseConfig;

use crate::InfraError;

/// Create the MySQL connection pool
///
/// # Arguments
/// * `config` - Database configuration settings
///
/// # Returns
/// * `Result<MySqlPool, InfraError>` - Connected pool or error
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfraError> {
    info!(
        "Creating database connection pool with max_connections: {}",
        config.max_connections
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(600))
        .test_before_acquire(true)
        .connect(&config.url)
        .await?;

    info!("Database connection pool created");
    Ok(pool)
}
