use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::{debug, instrument};

use estoque_core::AppError;
use estoque_models::{AccessState, Action, Module};

use crate::middleware::auth::AuthUser;
use crate::modules::access::resolve;
use crate::state::AppState;

/// Resolves the caller's access and checks one (module, action) pair.
/// Administrators pass every check.
#[instrument(skip(state, auth_user))]
pub async fn authorize(
    state: &AppState,
    auth_user: &AuthUser,
    module: Module,
    action: Action,
) -> Result<AccessState, AppError> {
    let user_id = auth_user.user_id()?;
    let access = resolve(state.access_store.as_ref(), Some(user_id)).await?;

    let allowed = access.is_admin
        || access
            .permissions
            .is_some_and(|p| p.allows(module, action));

    if !allowed {
        debug!(%user_id, "Access denied");
        return Err(AppError::forbidden(format!(
            "Access denied. Missing required permission: {}:{}",
            module.as_str(),
            action.as_str()
        )));
    }

    Ok(access)
}

/// Generates an extractor that admits a caller only when they hold the
/// given (module, action) permission.
#[macro_export]
macro_rules! require_access {
    ($name:ident, $module:expr, $action:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = estoque_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;

                $crate::middleware::access::authorize(state, &auth_user, $module, $action)
                    .await?;

                Ok($name(auth_user))
            }
        }
    };
}

require_access!(RequireEstoqueView, Module::Estoque, Action::View);
require_access!(RequireEstoqueAdd, Module::Estoque, Action::Add);
require_access!(RequireEstoqueEdit, Module::Estoque, Action::Edit);
require_access!(RequireEstoqueDelete, Module::Estoque, Action::Delete);

require_access!(RequireMovimentadosView, Module::Movimentados, Action::View);
require_access!(RequireMovimentadosAdd, Module::Movimentados, Action::Add);

require_access!(RequireComodatoView, Module::Comodato, Action::View);
require_access!(RequireComodatoAdd, Module::Comodato, Action::Add);
require_access!(RequireComodatoEdit, Module::Comodato, Action::Edit);
require_access!(RequireComodatoDelete, Module::Comodato, Action::Delete);

require_access!(RequireDashboardView, Module::Dashboard, Action::View);

/// Admits administrators only.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let access = resolve(state.access_store.as_ref(), Some(auth_user.user_id()?)).await?;

        if !access.is_admin {
            return Err(AppError::forbidden(
                "Access denied. Administrator role required".to_string(),
            ));
        }

        Ok(RequireAdmin(auth_user))
    }
}
