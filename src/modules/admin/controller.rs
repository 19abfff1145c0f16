use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use estoque_core::AppError;
use estoque_models::UserId;
use estoque_models::permissions::{
    SavePermissionsDto, UserPermissionRow, UserPermissionsResponse,
};
use estoque_models::profiles::{RoleChangeResponse, UsersResponse};

use crate::middleware::access::RequireAdmin;
use crate::modules::admin::service;
use crate::state::AppState;
use crate::validator::ValidatedJson;

fn reject_self(admin: &RequireAdmin, target: UserId, action: &str) -> Result<(), AppError> {
    if admin.0.user_id()? == target {
        return Err(AppError::bad_request(anyhow!(
            "Administrators cannot {} themselves",
            action
        )));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "Every user with their role", body = UsersResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrators only")
    ),
    tag = "Administration",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<UsersResponse>, AppError> {
    let data = service::list_users(&state.db).await?;
    Ok(Json(UsersResponse { data }))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(("id" = UserId, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted with their roles and permissions"),
        (status = 400, description = "Administrators cannot delete themselves"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrators only"),
        (status = 404, description = "User not found")
    ),
    tag = "Administration",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(user_id): Path<UserId>,
) -> Result<StatusCode, AppError> {
    reject_self(&admin, user_id, "delete")?;
    service::delete_user(&state.db, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/admin",
    params(("id" = UserId, Path, description = "User ID")),
    responses(
        (status = 201, description = "Admin role granted", body = RoleChangeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrators only"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User is already an administrator")
    ),
    tag = "Administration",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn grant_admin(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(user_id): Path<UserId>,
) -> Result<(StatusCode, Json<RoleChangeResponse>), AppError> {
    let response = service::grant_admin(&state.db, user_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}/admin",
    params(("id" = UserId, Path, description = "User ID")),
    responses(
        (status = 200, description = "Admin role revoked", body = RoleChangeResponse),
        (status = 400, description = "Administrators cannot revoke themselves"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrators only"),
        (status = 404, description = "User not found or not an administrator")
    ),
    tag = "Administration",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn revoke_admin(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(user_id): Path<UserId>,
) -> Result<Json<RoleChangeResponse>, AppError> {
    reject_self(&admin, user_id, "revoke")?;
    let response = service::revoke_admin(&state.db, user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/admin/users/{id}/permissions",
    params(("id" = UserId, Path, description = "User ID")),
    responses(
        (status = 200, description = "Stored permissions, or the default set", body = UserPermissionsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrators only"),
        (status = 404, description = "User not found")
    ),
    tag = "Administration",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_user_permissions(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserPermissionsResponse>, AppError> {
    let response =
        service::get_user_permissions(&state.db, state.access_store.as_ref(), user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/permissions",
    params(("id" = UserId, Path, description = "User ID")),
    request_body = SavePermissionsDto,
    responses(
        (status = 200, description = "Permissions saved", body = UserPermissionRow),
        (status = 400, description = "Missing or malformed flags"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrators only"),
        (status = 404, description = "User not found")
    ),
    tag = "Administration",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn save_user_permissions(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(user_id): Path<UserId>,
    // No validator rules: serde rejects a body missing any flag, and
    // ValidatedJson turns that into 400 "<flag> is required".
    ValidatedJson(dto): ValidatedJson<SavePermissionsDto>,
) -> Result<Json<UserPermissionRow>, AppError> {
    let row = service::save_user_permissions(&state.db, user_id, dto.permissions).await?;
    Ok(Json(row))
}
