use std::env;

use crate::env_parse;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Panics when `DATABASE_URL` is missing; the server cannot start without it.
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 10),
            acquire_timeout_secs: env_parse("DATABASE_ACQUIRE_TIMEOUT", 5),
        }
    }
}
