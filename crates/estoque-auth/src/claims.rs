//! Access token claims.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use estoque_core::AppError;

/// Claims carried by an access token.
///
/// Only `sub` is needed for authorization decisions. Roles and
/// permissions are never trusted from the token; they are resolved from
/// the role and permission stores on every request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address, when the issuer includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Audience, when the issuer includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize_without_optional_fields() {
        let json = r#"{"sub":"7f1c2b9e-3a4d-4c5e-8f60-112233445566","exp":2000000000,"iat":1700000000}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.email.is_none());
        assert!(claims.aud.is_none());
        assert_eq!(
            claims.user_id().unwrap(),
            Uuid::parse_str("7f1c2b9e-3a4d-4c5e-8f60-112233445566").unwrap()
        );
    }

    #[test]
    fn test_claims_with_non_uuid_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            email: None,
            aud: None,
            exp: 0,
            iat: 0,
        };
        assert!(claims.user_id().is_err());
    }

    #[test]
    fn test_claims_serialize_skips_missing_email() {
        let claims = Claims {
            sub: Uuid::nil().to_string(),
            email: None,
            aud: None,
            exp: 10,
            iat: 5,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("email"));
        assert!(!json.contains("aud"));
    }
}
