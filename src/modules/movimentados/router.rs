use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_movimentacao, list_movimentacoes, record_movimentacao};

pub fn init_movimentados_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_movimentacoes).post(record_movimentacao))
        .route("/{id}", get(get_movimentacao))
}
