use axum::{Json, extract::State};
use tracing::instrument;

use estoque_core::AppError;
use estoque_models::AccessState;

use crate::middleware::auth::MaybeAuthUser;
use crate::modules::access::resolve;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/access/me",
    responses(
        (status = 200, description = "Resolved access for the caller; anonymous without a token", body = AccessState),
        (status = 401, description = "Invalid or expired token"),
        (status = 500, description = "Role or permission lookup failed")
    ),
    tag = "Access",
    security((), ("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_my_access(
    State(state): State<AppState>,
    auth_user: MaybeAuthUser,
) -> Result<Json<AccessState>, AppError> {
    let user_id = auth_user.user_id()?;
    let access = resolve(state.access_store.as_ref(), user_id).await?;
    Ok(Json(access))
}
