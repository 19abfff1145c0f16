use anyhow::anyhow;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use estoque_core::{AppError, PaginationMeta, PaginationParams};
use estoque_models::MovimentacaoId;
use estoque_models::movimentacoes::{
    CreateMovimentacaoDto, Movimentacao, PaginatedMovimentacoesResponse,
};

const DEFAULT_STATUS: &str = "Em uso";

#[instrument(skip(db))]
pub async fn list_movimentacoes(
    db: &PgPool,
    params: PaginationParams,
) -> Result<PaginatedMovimentacoesResponse, AppError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movimentacoes")
        .fetch_one(db)
        .await?;

    let data = sqlx::query_as::<_, Movimentacao>(
        "SELECT * FROM movimentacoes ORDER BY data_movimentacao DESC, id LIMIT $1 OFFSET $2",
    )
    .bind(params.limit())
    .bind(params.offset())
    .fetch_all(db)
    .await?;

    Ok(PaginatedMovimentacoesResponse {
        data,
        meta: PaginationMeta::new(total, &params),
    })
}

#[instrument(skip(db))]
pub async fn get_movimentacao(db: &PgPool, id: MovimentacaoId) -> Result<Movimentacao, AppError> {
    sqlx::query_as::<_, Movimentacao>("SELECT * FROM movimentacoes WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Movement not found")))
}

#[instrument(skip(db))]
pub async fn record_movimentacao(
    db: &PgPool,
    dto: CreateMovimentacaoDto,
) -> Result<Movimentacao, AppError> {
    let data_movimentacao = dto.data_movimentacao.unwrap_or_else(Utc::now);
    let status = dto.status.unwrap_or_else(|| DEFAULT_STATUS.to_string());

    let movimentacao = sqlx::query_as::<_, Movimentacao>(
        r#"INSERT INTO movimentacoes
            (patrimonio, categoria, item, descricao, responsavel,
             data_entrada, data_saida, data_movimentacao, localizacao, status)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
           RETURNING *"#,
    )
    .bind(&dto.patrimonio)
    .bind(&dto.categoria)
    .bind(&dto.item)
    .bind(&dto.descricao)
    .bind(&dto.responsavel)
    .bind(dto.data_entrada)
    .bind(dto.data_saida)
    .bind(data_movimentacao)
    .bind(&dto.localizacao)
    .bind(&status)
    .fetch_one(db)
    .await
    .map_err(AppError::database)?;

    Ok(movimentacao)
}
