//! User profiles and the administration listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::UserId;
use crate::roles::AppRole;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A profile joined with its role tag, as shown on the administration screen.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserWithRole {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub role: AppRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub data: Vec<UserWithRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleChangeResponse {
    pub user_id: UserId,
    pub role: AppRole,
}
