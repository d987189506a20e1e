//! Connection pool utilities

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;

/// Create the process-wide connection pool.
///
/// Connections are opened lazily on first checkout, so this does not touch
/// the network.
///
/// # Example
///
/// ```ignore
/// let pool = lightbnb_db::create_pool(&DbConfig::from_env()?)?;
/// let client = pool.get().await?;
/// let user = lightbnb_db::get_user_with_id(&client, 1).await?;
/// ```
pub fn create_pool(config: &DbConfig) -> DbResult<Pool> {
    let pg_config = config.pg_config()?;
    let mgr = Manager::from_config(pg_config, NoTls, default_manager_config());

    let mut builder = Pool::builder(mgr).max_size(config.pool_size);
    if let Some(timeout) = config.pool_timeout {
        builder = builder.wait_timeout(Some(timeout)).runtime(Runtime::Tokio1);
    }

    let pool = builder.build().map_err(|e| DbError::Pool(e.to_string()))?;
    tracing::info!(
        max_size = config.pool_size,
        wait_timeout = ?config.pool_timeout,
        "database pool created"
    );
    Ok(pool)
}

fn default_manager_config() -> ManagerConfig {
    ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    }
}
