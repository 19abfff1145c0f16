use std::env;

use crate::env_parse;

/// Tokens are issued by the external auth service and signed with a shared
/// HS256 secret. The expiry is only used when this service mints tokens
/// itself (CLI and tests).
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    /// Expected `aud` claim. Audience is not checked when unset.
    pub audience: Option<String>,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env_parse("JWT_ACCESS_EXPIRY", 3600),
            audience: env::var("JWT_AUDIENCE").ok().filter(|s| !s.trim().is_empty()),
        }
    }
}
