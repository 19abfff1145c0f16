use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use estoque_core::AppError;
use estoque_models::EstoqueItemId;
use estoque_models::estoque::{
    CreateEstoqueItemDto, EstoqueFilter, EstoqueItemResponse, EstoqueListResponse,
    UpdateEstoqueItemDto,
};

use crate::middleware::access::{
    RequireEstoqueAdd, RequireEstoqueDelete, RequireEstoqueEdit, RequireEstoqueView,
};
use crate::modules::estoque::service::EstoqueService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/estoque",
    params(EstoqueFilter),
    responses(
        (status = 200, description = "Inventory items matching the filter", body = EstoqueListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires estoque:view")
    ),
    tag = "Estoque",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
    _auth: RequireEstoqueView,
    Query(filter): Query<EstoqueFilter>,
) -> Result<Json<EstoqueListResponse>, AppError> {
    let items = EstoqueService::list_items(&state.db, &filter).await?;
    let data: Vec<EstoqueItemResponse> = items.into_iter().map(Into::into).collect();
    let total = data.len();
    Ok(Json(EstoqueListResponse { data, total }))
}

#[utoipa::path(
    get,
    path = "/api/estoque/{id}",
    params(("id" = EstoqueItemId, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Inventory item", body = EstoqueItemResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires estoque:view"),
        (status = 404, description = "Item not found")
    ),
    tag = "Estoque",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    _auth: RequireEstoqueView,
    Path(id): Path<EstoqueItemId>,
) -> Result<Json<EstoqueItemResponse>, AppError> {
    let item = EstoqueService::get_item(&state.db, id).await?;
    Ok(Json(item.into()))
}

#[utoipa::path(
    post,
    path = "/api/estoque",
    request_body = CreateEstoqueItemDto,
    responses(
        (status = 201, description = "Item created", body = EstoqueItemResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires estoque:add"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Estoque",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_item(
    State(state): State<AppState>,
    _auth: RequireEstoqueAdd,
    ValidatedJson(dto): ValidatedJson<CreateEstoqueItemDto>,
) -> Result<(StatusCode, Json<EstoqueItemResponse>), AppError> {
    let item = EstoqueService::create_item(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

#[utoipa::path(
    put,
    path = "/api/estoque/{id}",
    params(("id" = EstoqueItemId, Path, description = "Item ID")),
    request_body = UpdateEstoqueItemDto,
    responses(
        (status = 200, description = "Item updated", body = EstoqueItemResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires estoque:edit"),
        (status = 404, description = "Item not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Estoque",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_item(
    State(state): State<AppState>,
    _auth: RequireEstoqueEdit,
    Path(id): Path<EstoqueItemId>,
    ValidatedJson(dto): ValidatedJson<UpdateEstoqueItemDto>,
) -> Result<Json<EstoqueItemResponse>, AppError> {
    let item = EstoqueService::update_item(&state.db, id, dto).await?;
    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/api/estoque/{id}",
    params(("id" = EstoqueItemId, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires estoque:delete"),
        (status = 404, description = "Item not found")
    ),
    tag = "Estoque",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    _auth: RequireEstoqueDelete,
    Path(id): Path<EstoqueItemId>,
) -> Result<StatusCode, AppError> {
    EstoqueService::delete_item(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
