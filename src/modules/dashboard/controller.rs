use axum::{Json, extract::State};
use tracing::instrument;

use estoque_core::AppError;
use estoque_models::dashboard::DashboardResponse;

use crate::middleware::access::RequireDashboardView;
use crate::modules::dashboard::service;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Chart aggregates over the current inventory", body = DashboardResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires dashboard:view")
    ),
    tag = "Dashboard",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    _auth: RequireDashboardView,
) -> Result<Json<DashboardResponse>, AppError> {
    let dashboard = service::get_dashboard(&state.db).await?;
    Ok(Json(dashboard))
}
