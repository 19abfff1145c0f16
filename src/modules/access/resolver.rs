use std::fmt;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use estoque_models::{AccessState, PermissionSet, UserId, default_permissions};

use crate::metrics::track_access_resolution;

use super::store::AccessStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Role,
    Permissions,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Role => f.write_str("role"),
            Lookup::Permissions => f.write_str("permission"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("{lookup} lookup failed for user {user_id}")]
    LookupFailure {
        user_id: UserId,
        lookup: Lookup,
        #[source]
        source: sqlx::Error,
    },
}

/// Resolves the access state for `user_id`.
///
/// Without a user nothing is queried. Otherwise the role store is asked
/// first; administrators get every permission and the permission store is
/// never consulted. Everyone else gets their stored row, or the default
/// set when there is none. The default is not written back.
#[instrument(skip(store))]
pub async fn resolve<S>(store: &S, user_id: Option<UserId>) -> Result<AccessState, AccessError>
where
    S: AccessStore + ?Sized,
{
    let Some(user_id) = user_id else {
        return Ok(AccessState::anonymous());
    };

    let result = resolve_user(store, user_id).await;

    match &result {
        Ok(state) if state.is_admin => track_access_resolution("admin"),
        Ok(_) => track_access_resolution("user"),
        Err(e) => {
            warn!(error = %e, "Access resolution failed");
            track_access_resolution("failed");
        }
    }

    result
}

async fn resolve_user<S>(store: &S, user_id: UserId) -> Result<AccessState, AccessError>
where
    S: AccessStore + ?Sized,
{
    let is_admin = store
        .has_admin_role(user_id)
        .await
        .map_err(|source| AccessError::LookupFailure {
            user_id,
            lookup: Lookup::Role,
            source,
        })?;

    if is_admin {
        return Ok(AccessState::resolved(true, PermissionSet::all_granted()));
    }

    let stored = store
        .find_permissions(user_id)
        .await
        .map_err(|source| AccessError::LookupFailure {
            user_id,
            lookup: Lookup::Permissions,
            source,
        })?;

    let permissions = match stored {
        Some(permissions) => permissions,
        None => {
            debug!(%user_id, "No stored permissions, using defaults");
            default_permissions()
        }
    };

    Ok(AccessState::resolved(false, permissions))
}
