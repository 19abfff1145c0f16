use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use estoque_core::AppError;
use estoque_models::ComodatoItemId;
use estoque_models::comodato::{
    ComodatoItem, ComodatoListResponse, CreateComodatoItemDto, UpdateComodatoItemDto,
};

use crate::middleware::access::{
    RequireComodatoAdd, RequireComodatoDelete, RequireComodatoEdit, RequireComodatoView,
};
use crate::modules::comodato::service::ComodatoService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/comodato",
    responses(
        (status = 200, description = "Loaned and rented equipment", body = ComodatoListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires comodato:view")
    ),
    tag = "Comodato",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
    _auth: RequireComodatoView,
) -> Result<Json<ComodatoListResponse>, AppError> {
    let data = ComodatoService::list_items(&state.db).await?;
    let total = data.len();
    Ok(Json(ComodatoListResponse { data, total }))
}

#[utoipa::path(
    get,
    path = "/api/comodato/{id}",
    params(("id" = ComodatoItemId, Path, description = "Comodato item ID")),
    responses(
        (status = 200, description = "Comodato item", body = ComodatoItem),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires comodato:view"),
        (status = 404, description = "Comodato item not found")
    ),
    tag = "Comodato",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    _auth: RequireComodatoView,
    Path(id): Path<ComodatoItemId>,
) -> Result<Json<ComodatoItem>, AppError> {
    let item = ComodatoService::get_item(&state.db, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/comodato",
    request_body = CreateComodatoItemDto,
    responses(
        (status = 201, description = "Comodato item created", body = ComodatoItem),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires comodato:add"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Comodato",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_item(
    State(state): State<AppState>,
    _auth: RequireComodatoAdd,
    ValidatedJson(dto): ValidatedJson<CreateComodatoItemDto>,
) -> Result<(StatusCode, Json<ComodatoItem>), AppError> {
    let item = ComodatoService::create_item(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/comodato/{id}",
    params(("id" = ComodatoItemId, Path, description = "Comodato item ID")),
    request_body = UpdateComodatoItemDto,
    responses(
        (status = 200, description = "Comodato item updated", body = ComodatoItem),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires comodato:edit"),
        (status = 404, description = "Comodato item not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Comodato",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_item(
    State(state): State<AppState>,
    _auth: RequireComodatoEdit,
    Path(id): Path<ComodatoItemId>,
    ValidatedJson(dto): ValidatedJson<UpdateComodatoItemDto>,
) -> Result<Json<ComodatoItem>, AppError> {
    let item = ComodatoService::update_item(&state.db, id, dto).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/comodato/{id}",
    params(("id" = ComodatoItemId, Path, description = "Comodato item ID")),
    responses(
        (status = 204, description = "Comodato item deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires comodato:delete"),
        (status = 404, description = "Comodato item not found")
    ),
    tag = "Comodato",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    _auth: RequireComodatoDelete,
    Path(id): Path<ComodatoItemId>,
) -> Result<StatusCode, AppError> {
    ComodatoService::delete_item(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
