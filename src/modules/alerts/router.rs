use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::classify_quantity;

pub fn init_alerts_router() -> Router<AppState> {
    Router::new().route("/classify", get(classify_quantity))
}
