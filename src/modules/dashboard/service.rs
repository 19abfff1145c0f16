use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use estoque_core::AppError;
use estoque_models::dashboard::DashboardResponse;

use crate::modules::estoque::service::EstoqueService;

#[instrument(skip(db))]
pub async fn get_dashboard(db: &PgPool) -> Result<DashboardResponse, AppError> {
    let items = EstoqueService::all_items(db).await?;
    Ok(DashboardResponse::summarize(&items, Utc::now()))
}
