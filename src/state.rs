use std::sync::Arc;

use sqlx::PgPool;

use estoque_config::{CorsConfig, DatabaseConfig, JwtConfig};
use estoque_db::init_db_pool;

use crate::modules::access::{AccessStore, PgAccessStore};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub access_store: Arc<dyn AccessStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &"<redacted>")
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// State backed by `db` for both the inventory and the access stores.
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        let access_store = Arc::new(PgAccessStore::new(db.clone()));
        Self {
            db,
            access_store,
            jwt_config,
            cors_config,
        }
    }

    pub fn with_access_store(mut self, store: Arc<dyn AccessStore>) -> Self {
        self.access_store = store;
        self
    }
}

pub async fn init_app_state() -> Result<AppState, sqlx::Error> {
    let db = init_db_pool(&DatabaseConfig::from_env()).await?;
    Ok(AppState::new(
        db,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
