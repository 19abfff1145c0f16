use sqlx::PgPool;
use uuid::Uuid;

use estoque_models::UserId;

/// Creates (or reuses, by email) a profile and gives it the admin tag.
///
/// Granting over HTTP already requires an administrator, so this is how
/// the first one comes to exist. Re-running it for an existing admin is a
/// no-op.
pub async fn create_admin(
    pool: &PgPool,
    id: Option<Uuid>,
    email: &str,
    full_name: Option<&str>,
) -> Result<UserId, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let user_id = sqlx::query_scalar::<_, UserId>(
        r#"INSERT INTO profiles (id, email, full_name)
           VALUES ($1, $2, $3)
           ON CONFLICT (email) DO UPDATE
               SET full_name = COALESCE(EXCLUDED.full_name, profiles.full_name)
           RETURNING id"#,
    )
    .bind(id.unwrap_or_else(Uuid::new_v4))
    .bind(email)
    .bind(full_name)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO user_roles (user_id, role) VALUES ($1, 'admin') ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(user_id)
}
