//! Resolved access state as returned to clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::permissions::PermissionSet;

/// Outcome of resolving a user's access.
///
/// `permissions` is `None` only when there is no user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccessState {
    pub is_admin: bool,
    pub permissions: Option<PermissionSet>,
    pub loading: bool,
}

impl AccessState {
    /// No identity: nothing to resolve.
    pub const fn anonymous() -> Self {
        Self {
            is_admin: false,
            permissions: None,
            loading: false,
        }
    }

    pub const fn resolved(is_admin: bool, permissions: PermissionSet) -> Self {
        Self {
            is_admin,
            permissions: Some(permissions),
            loading: false,
        }
    }
}

impl Default for AccessState {
    fn default() -> Self {
        Self::anonymous()
    }
}
