//! # Estoque DB
//!
//! PostgreSQL connection pool setup. The database holds the role store,
//! the permission store, the profile records and the inventory tables.
//!
//! # Example
//!
//! ```ignore
//! use estoque_config::DatabaseConfig;
//! use estoque_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sqlx::Error> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use estoque_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use sqlx::PgPool;

/// Opens a connection pool. The returned pool is cheaply cloneable and is
/// shared by every request through the application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}
