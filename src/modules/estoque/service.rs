use anyhow::anyhow;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use estoque_core::AppError;
use estoque_models::EstoqueItemId;
use estoque_models::estoque::{
    CreateEstoqueItemDto, DEFAULT_STATUS, EstoqueFilter, EstoqueItem, UpdateEstoqueItemDto,
};

use crate::metrics::track_stock_alert;

pub struct EstoqueService;

impl EstoqueService {
    /// Every item matching `filter`, oldest entry first.
    #[instrument(skip(db))]
    pub async fn list_items(
        db: &PgPool,
        filter: &EstoqueFilter,
    ) -> Result<Vec<EstoqueItem>, AppError> {
        let items = Self::all_items(db).await?;
        Ok(filter.apply(items))
    }

    pub async fn all_items(db: &PgPool) -> Result<Vec<EstoqueItem>, AppError> {
        let items = sqlx::query_as::<_, EstoqueItem>(
            "SELECT * FROM estoque_items ORDER BY data_entrada, patrimonio, created_at",
        )
        .fetch_all(db)
        .await?;
        Ok(items)
    }

    #[instrument(skip(db))]
    pub async fn get_item(db: &PgPool, id: EstoqueItemId) -> Result<EstoqueItem, AppError> {
        sqlx::query_as::<_, EstoqueItem>("SELECT * FROM estoque_items WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Item not found")))
    }

    #[instrument(skip(db))]
    pub async fn create_item(
        db: &PgPool,
        dto: CreateEstoqueItemDto,
    ) -> Result<EstoqueItem, AppError> {
        let data_entrada = dto.data_entrada.unwrap_or_else(|| Utc::now().date_naive());
        let status = dto.status.unwrap_or_else(|| DEFAULT_STATUS.to_string());

        let item = sqlx::query_as::<_, EstoqueItem>(
            r#"INSERT INTO estoque_items
                (patrimonio, categoria, item, descricao, localizacao, responsavel,
                 data_entrada, status, quantidade, consumo, imobilizado, observacao)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
               RETURNING *"#,
        )
        .bind(&dto.patrimonio)
        .bind(&dto.categoria)
        .bind(&dto.item)
        .bind(&dto.descricao)
        .bind(&dto.localizacao)
        .bind(&dto.responsavel)
        .bind(data_entrada)
        .bind(&status)
        .bind(dto.quantidade)
        .bind(dto.consumo)
        .bind(dto.imobilizado)
        .bind(&dto.observacao)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        track_stock_alert(item.alert());
        Ok(item)
    }

    #[instrument(skip(db))]
    pub async fn update_item(
        db: &PgPool,
        id: EstoqueItemId,
        dto: UpdateEstoqueItemDto,
    ) -> Result<EstoqueItem, AppError> {
        let mut item = Self::get_item(db, id).await?;
        dto.apply(&mut item);

        let item = sqlx::query_as::<_, EstoqueItem>(
            r#"UPDATE estoque_items SET
                patrimonio = $2, categoria = $3, item = $4, descricao = $5,
                localizacao = $6, responsavel = $7, data_entrada = $8, status = $9,
                quantidade = $10, consumo = $11, imobilizado = $12, observacao = $13,
                updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(&item.patrimonio)
        .bind(&item.categoria)
        .bind(&item.item)
        .bind(&item.descricao)
        .bind(&item.localizacao)
        .bind(&item.responsavel)
        .bind(item.data_entrada)
        .bind(&item.status)
        .bind(item.quantidade)
        .bind(item.consumo)
        .bind(item.imobilizado)
        .bind(&item.observacao)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Item not found")))?;

        track_stock_alert(item.alert());
        Ok(item)
    }

    #[instrument(skip(db))]
    pub async fn delete_item(db: &PgPool, id: EstoqueItemId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM estoque_items WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Item not found")));
        }

        Ok(())
    }
}
