use axum::{Json, extract::Query};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

use estoque_models::alerts::AlertClassification;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClassifyParams {
    /// Quantity on hand; may be negative
    pub quantity: i64,
}

#[utoipa::path(
    get,
    path = "/api/alerts/classify",
    params(ClassifyParams),
    responses(
        (status = 200, description = "Alert level for the quantity", body = AlertClassification),
        (status = 400, description = "Missing or non-integer quantity")
    ),
    tag = "Alerts"
)]
#[instrument]
pub async fn classify_quantity(Query(params): Query<ClassifyParams>) -> Json<AlertClassification> {
    Json(AlertClassification::for_quantity(params.quantity))
}
