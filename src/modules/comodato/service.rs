use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use estoque_core::AppError;
use estoque_models::ComodatoItemId;
use estoque_models::comodato::{ComodatoItem, CreateComodatoItemDto, UpdateComodatoItemDto};

pub struct ComodatoService;

impl ComodatoService {
    #[instrument(skip(db))]
    pub async fn list_items(db: &PgPool) -> Result<Vec<ComodatoItem>, AppError> {
        let items = sqlx::query_as::<_, ComodatoItem>(
            "SELECT * FROM comodato_items ORDER BY data_locacao NULLS LAST, item",
        )
        .fetch_all(db)
        .await?;
        Ok(items)
    }

    #[instrument(skip(db))]
    pub async fn get_item(db: &PgPool, id: ComodatoItemId) -> Result<ComodatoItem, AppError> {
        sqlx::query_as::<_, ComodatoItem>("SELECT * FROM comodato_items WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Comodato item not found")))
    }

    #[instrument(skip(db))]
    pub async fn create_item(
        db: &PgPool,
        dto: CreateComodatoItemDto,
    ) -> Result<ComodatoItem, AppError> {
        let item = sqlx::query_as::<_, ComodatoItem>(
            r#"INSERT INTO comodato_items
                (categoria, item, descricao, quantidade, fornecedor,
                 data_locacao, data_devolucao, responsavel, observacoes)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               RETURNING *"#,
        )
        .bind(&dto.categoria)
        .bind(&dto.item)
        .bind(&dto.descricao)
        .bind(dto.quantidade)
        .bind(&dto.fornecedor)
        .bind(dto.data_locacao)
        .bind(dto.data_devolucao)
        .bind(&dto.responsavel)
        .bind(&dto.observacoes)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(item)
    }

    #[instrument(skip(db))]
    pub async fn update_item(
        db: &PgPool,
        id: ComodatoItemId,
        dto: UpdateComodatoItemDto,
    ) -> Result<ComodatoItem, AppError> {
        let mut item = Self::get_item(db, id).await?;
        dto.apply(&mut item).map_err(|e| {
            AppError::unprocessable(anyhow!(
                "{}",
                e.message.as_deref().unwrap_or("invalid rental period")
            ))
        })?;

        let item = sqlx::query_as::<_, ComodatoItem>(
            r#"UPDATE comodato_items SET
                categoria = $2, item = $3, descricao = $4, quantidade = $5,
                fornecedor = $6, data_locacao = $7, data_devolucao = $8,
                responsavel = $9, observacoes = $10, updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(&item.categoria)
        .bind(&item.item)
        .bind(&item.descricao)
        .bind(item.quantidade)
        .bind(&item.fornecedor)
        .bind(item.data_locacao)
        .bind(item.data_devolucao)
        .bind(&item.responsavel)
        .bind(&item.observacoes)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Comodato item not found")))?;

        Ok(item)
    }

    #[instrument(skip(db))]
    pub async fn delete_item(db: &PgPool, id: ComodatoItemId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comodato_items WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Comodato item not found")));
        }

        Ok(())
    }
}
