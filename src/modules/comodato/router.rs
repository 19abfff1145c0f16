use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_item, delete_item, get_item, list_items, update_item};

pub fn init_comodato_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
}
