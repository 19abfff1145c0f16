//! # Estoque Auth
//!
//! Identity is owned by an external auth service. This crate only knows
//! how to read (and, for tooling and tests, mint) the HS256 bearer tokens
//! it issues.
//!
//! - [`claims`]: the access token claim set
//! - [`jwt`]: token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use estoque_auth::{create_access_token, verify_token};
//! use estoque_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "ana@empresa.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id()?, user_id);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
