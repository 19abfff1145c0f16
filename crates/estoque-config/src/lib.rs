//! # Estoque Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: bearer token verification
//! - [`cors`]: allowed browser origins
//! - [`database`]: connection pool sizing
//! - [`server`]: listen addresses for the API and the metrics exporter
//!
//! # Example
//!
//! ```ignore
//! use estoque_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! println!("listening on {}", server_config.api_addr());
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
