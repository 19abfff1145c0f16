use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use estoque_core::{AppError, PaginationParams};
use estoque_models::MovimentacaoId;
use estoque_models::movimentacoes::{
    CreateMovimentacaoDto, Movimentacao, PaginatedMovimentacoesResponse,
};

use crate::middleware::access::{RequireMovimentadosAdd, RequireMovimentadosView};
use crate::modules::movimentados::service;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/movimentados",
    params(PaginationParams),
    responses(
        (status = 200, description = "Movements, newest first", body = PaginatedMovimentacoesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires movimentados:view")
    ),
    tag = "Movimentados",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_movimentacoes(
    State(state): State<AppState>,
    _auth: RequireMovimentadosView,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedMovimentacoesResponse>, AppError> {
    let response = service::list_movimentacoes(&state.db, params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/movimentados/{id}",
    params(("id" = MovimentacaoId, Path, description = "Movement ID")),
    responses(
        (status = 200, description = "Movement", body = Movimentacao),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires movimentados:view"),
        (status = 404, description = "Movement not found")
    ),
    tag = "Movimentados",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_movimentacao(
    State(state): State<AppState>,
    _auth: RequireMovimentadosView,
    Path(id): Path<MovimentacaoId>,
) -> Result<Json<Movimentacao>, AppError> {
    let movimentacao = service::get_movimentacao(&state.db, id).await?;
    Ok(Json(movimentacao))
}

#[utoipa::path(
    post,
    path = "/api/movimentados",
    request_body = CreateMovimentacaoDto,
    responses(
        (status = 201, description = "Movement recorded", body = Movimentacao),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires movimentados:add"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Movimentados",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn record_movimentacao(
    State(state): State<AppState>,
    _auth: RequireMovimentadosAdd,
    ValidatedJson(dto): ValidatedJson<CreateMovimentacaoDto>,
) -> Result<(StatusCode, Json<Movimentacao>), AppError> {
    let movimentacao = service::record_movimentacao(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(movimentacao)))
}
