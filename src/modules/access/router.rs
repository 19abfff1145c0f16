use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_my_access;

pub fn init_access_router() -> Router<AppState> {
    Router::new().route("/me", get(get_my_access))
}
