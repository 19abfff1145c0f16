//! The role tag attached to a user.
//!
//! Only `admin` is ever stored in `user_roles`; a user without that tag is
//! implicitly `user`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(type_name = "app_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    User,
}

impl AppRole {
    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin { AppRole::Admin } else { AppRole::User }
    }

    pub fn is_admin(self) -> bool {
        self == AppRole::Admin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
            AppRole::User => "user",
        }
    }

    /// The role a toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            AppRole::Admin => AppRole::User,
            AppRole::User => AppRole::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(AppRole::Admin.toggled(), AppRole::User);
        assert_eq!(AppRole::User.toggled(), AppRole::Admin);
    }

    #[test]
    fn test_from_admin_flag() {
        assert!(AppRole::from_admin_flag(true).is_admin());
        assert!(!AppRole::from_admin_flag(false).is_admin());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&AppRole::Admin).unwrap(), r#""admin""#);
        let role: AppRole = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(role, AppRole::User);
    }
}
