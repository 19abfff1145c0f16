use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use estoque_auth::{Claims, verify_token};
use estoque_core::AppError;
use estoque_models::UserId;

use crate::state::AppState;

/// Extractor that validates the bearer token and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.0.user_id().map(UserId::from_uuid)
    }

    pub fn email(&self) -> Option<&str> {
        self.0.email.as_deref()
    }
}

fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(Some)
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format".to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// Like [`AuthUser`], but a request without an `Authorization` header is
/// anonymous instead of rejected. A header that is present must still be a
/// valid token.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn user_id(&self) -> Result<Option<UserId>, AppError> {
        self.0.as_ref().map(AuthUser::user_id).transpose()
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_token(parts)? {
            None => Ok(MaybeAuthUser(None)),
            Some(token) => {
                let claims = verify_token(token, &state.jwt_config)?;
                Ok(MaybeAuthUser(Some(AuthUser(claims))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use uuid::Uuid;

    fn parts_with(header_value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header_value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_absent() {
        assert!(bearer_token(&parts_with(None)).unwrap().is_none());
    }

    #[test]
    fn test_bearer_token_present() {
        let parts = parts_with(Some("Bearer abc.def"));
        assert_eq!(bearer_token(&parts).unwrap(), Some("abc.def"));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let err = bearer_token(&parts_with(Some("Basic dXNlcg=="))).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_user_id() {
        let id = Uuid::new_v4();
        let auth_user = AuthUser(Claims {
            sub: id.to_string(),
            email: Some("ana@empresa.com".to_string()),
            aud: None,
            exp: 9999999999,
            iat: 1234567890,
        });

        assert_eq!(auth_user.user_id().unwrap(), UserId::from_uuid(id));
        assert_eq!(auth_user.email(), Some("ana@empresa.com"));
    }
}
