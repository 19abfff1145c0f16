use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estoque_models::{PermissionSet, UserId};

/// Role and permission lookups the resolver depends on.
///
/// `find_permissions` returns `Ok(None)` when the user has no stored row;
/// that is not an error.
#[async_trait]
pub trait AccessStore: Send + Sync {
    async fn has_admin_role(&self, user_id: UserId) -> Result<bool, sqlx::Error>;

    async fn find_permissions(&self, user_id: UserId)
    -> Result<Option<PermissionSet>, sqlx::Error>;
}

#[derive(Clone, Debug)]
pub struct PgAccessStore {
    pool: PgPool,
}

impl PgAccessStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessStore for PgAccessStore {
    #[instrument(skip(self))]
    async fn has_admin_role(&self, user_id: UserId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_roles WHERE user_id = $1 AND role = 'admin')",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    #[instrument(skip(self))]
    async fn find_permissions(
        &self,
        user_id: UserId,
    ) -> Result<Option<PermissionSet>, sqlx::Error> {
        sqlx::query_as::<_, PermissionSet>(
            r#"SELECT can_view_estoque, can_add_estoque, can_edit_estoque, can_delete_estoque,
                      can_view_movimentados, can_add_movimentados, can_edit_movimentados,
                      can_delete_movimentados, can_view_comodato, can_add_comodato,
                      can_edit_comodato, can_delete_comodato, can_view_dashboard
               FROM user_permissions WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }
}
