use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{info, instrument};

use estoque_core::AppError;
use estoque_models::permissions::{UserPermissionRow, UserPermissionsResponse};
use estoque_models::profiles::{RoleChangeResponse, UserWithRole};
use estoque_models::{AppRole, PermissionSet, UserId, default_permissions};

use crate::metrics::track_permissions_updated;
use crate::modules::access::AccessStore;

fn user_not_found() -> AppError {
    AppError::not_found(anyhow!("User not found"))
}

async fn ensure_profile(db: &PgPool, user_id: UserId) -> Result<(), AppError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM profiles WHERE id = $1)")
            .bind(user_id)
            .fetch_one(db)
            .await?;

    if !exists {
        return Err(user_not_found());
    }
    Ok(())
}

/// Every profile ordered by email, tagged `admin` or `user`.
#[instrument(skip(db))]
pub async fn list_users(db: &PgPool) -> Result<Vec<UserWithRole>, AppError> {
    let users = sqlx::query_as::<_, UserWithRole>(
        r#"SELECT p.id, p.email, p.full_name,
                  CASE WHEN ur.user_id IS NULL THEN 'user'::app_role
                       ELSE 'admin'::app_role END AS role
           FROM profiles p
           LEFT JOIN user_roles ur ON ur.user_id = p.id AND ur.role = 'admin'
           ORDER BY p.email"#,
    )
    .fetch_all(db)
    .await?;

    Ok(users)
}

/// Removes the profile together with its role tags and permission row.
#[instrument(skip(db))]
pub async fn delete_user(db: &PgPool, user_id: UserId) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(user_id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(user_not_found());
    }

    info!(%user_id, "User deleted");
    Ok(())
}

/// Adds the admin tag. The permission row, if any, is left untouched.
#[instrument(skip(db))]
pub async fn grant_admin(db: &PgPool, user_id: UserId) -> Result<RoleChangeResponse, AppError> {
    sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, 'admin')")
        .bind(user_id)
        .execute(db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(anyhow!("User is already an administrator"))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                user_not_found()
            }
            _ => AppError::database(e),
        })?;

    info!(%user_id, "Admin role granted");
    Ok(RoleChangeResponse {
        user_id,
        role: AppRole::Admin,
    })
}

/// Removes only the admin tag. No permission row is created, so a user
/// without one falls back to the default set on the next resolution.
#[instrument(skip(db))]
pub async fn revoke_admin(db: &PgPool, user_id: UserId) -> Result<RoleChangeResponse, AppError> {
    let result = sqlx::query("DELETE FROM user_roles WHERE user_id = $1 AND role = 'admin'")
        .bind(user_id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        ensure_profile(db, user_id).await?;
        return Err(AppError::not_found(anyhow!(
            "User is not an administrator"
        )));
    }

    info!(%user_id, "Admin role revoked");
    Ok(RoleChangeResponse {
        user_id,
        role: AppRole::User,
    })
}

/// The stored permission row for editing, or the default set when the
/// user has none.
#[instrument(skip(db, store))]
pub async fn get_user_permissions(
    db: &PgPool,
    store: &dyn AccessStore,
    user_id: UserId,
) -> Result<UserPermissionsResponse, AppError> {
    ensure_profile(db, user_id).await?;

    let stored = store
        .find_permissions(user_id)
        .await
        .map_err(AppError::database)?;

    Ok(UserPermissionsResponse {
        user_id,
        stored: stored.is_some(),
        permissions: stored.unwrap_or_else(default_permissions),
    })
}

/// Writes all 13 flags, creating the row when missing.
#[instrument(skip(db))]
pub async fn save_user_permissions(
    db: &PgPool,
    user_id: UserId,
    permissions: PermissionSet,
) -> Result<UserPermissionRow, AppError> {
    let row = sqlx::query_as::<_, UserPermissionRow>(
        r#"INSERT INTO user_permissions (
                user_id,
                can_view_estoque, can_add_estoque, can_edit_estoque, can_delete_estoque,
                can_view_movimentados, can_add_movimentados, can_edit_movimentados,
                can_delete_movimentados,
                can_view_comodato, can_add_comodato, can_edit_comodato, can_delete_comodato,
                can_view_dashboard)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
           ON CONFLICT (user_id) DO UPDATE SET
                can_view_estoque = EXCLUDED.can_view_estoque,
                can_add_estoque = EXCLUDED.can_add_estoque,
                can_edit_estoque = EXCLUDED.can_edit_estoque,
                can_delete_estoque = EXCLUDED.can_delete_estoque,
                can_view_movimentados = EXCLUDED.can_view_movimentados,
                can_add_movimentados = EXCLUDED.can_add_movimentados,
                can_edit_movimentados = EXCLUDED.can_edit_movimentados,
                can_delete_movimentados = EXCLUDED.can_delete_movimentados,
                can_view_comodato = EXCLUDED.can_view_comodato,
                can_add_comodato = EXCLUDED.can_add_comodato,
                can_edit_comodato = EXCLUDED.can_edit_comodato,
                can_delete_comodato = EXCLUDED.can_delete_comodato,
                can_view_dashboard = EXCLUDED.can_view_dashboard,
                updated_at = NOW()
           RETURNING user_id,
                can_view_estoque, can_add_estoque, can_edit_estoque, can_delete_estoque,
                can_view_movimentados, can_add_movimentados, can_edit_movimentados,
                can_delete_movimentados,
                can_view_comodato, can_add_comodato, can_edit_comodato, can_delete_comodato,
                can_view_dashboard"#,
    )
    .bind(user_id)
    .bind(permissions.can_view_estoque)
    .bind(permissions.can_add_estoque)
    .bind(permissions.can_edit_estoque)
    .bind(permissions.can_delete_estoque)
    .bind(permissions.can_view_movimentados)
    .bind(permissions.can_add_movimentados)
    .bind(permissions.can_edit_movimentados)
    .bind(permissions.can_delete_movimentados)
    .bind(permissions.can_view_comodato)
    .bind(permissions.can_add_comodato)
    .bind(permissions.can_edit_comodato)
    .bind(permissions.can_delete_comodato)
    .bind(permissions.can_view_dashboard)
    .fetch_one(db)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => user_not_found(),
        _ => AppError::database(e),
    })?;

    track_permissions_updated();
    info!(%user_id, granted = ?permissions.granted(), "Permissions saved");
    Ok(row)
}
