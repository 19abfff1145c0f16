use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    delete_user, get_user_permissions, grant_admin, list_users, revoke_admin,
    save_user_permissions,
};

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", delete(delete_user))
        .route("/users/{id}/admin", post(grant_admin).delete(revoke_admin))
        .route(
            "/users/{id}/permissions",
            get(get_user_permissions).put(save_user_permissions),
        )
}
