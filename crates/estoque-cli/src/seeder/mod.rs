//! Sample rows for a fresh database.
//!
//! Rows are matched on patrimônio (inventory and movements) or on item and
//! supplier (comodato), so seeding twice inserts nothing new.

mod models;

pub use models::{
    SeedComodatoItem, SeedEstoqueItem, SeedMovimentacao, SeedSummary, sample_comodato,
    sample_estoque, sample_movimentacoes,
};

use sqlx::PgPool;

pub async fn seed_sample_data(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    for row in sample_estoque() {
        let result = sqlx::query(
            r#"INSERT INTO estoque_items
                (patrimonio, categoria, item, descricao, localizacao, responsavel,
                 data_entrada, status, quantidade, consumo, imobilizado, observacao)
               SELECT $1, $2, $3, $4, $5, $6, $7::date, $8, $9, $10, $11, $12
               WHERE NOT EXISTS (SELECT 1 FROM estoque_items WHERE patrimonio = $1)"#,
        )
        .bind(row.patrimonio)
        .bind(row.categoria)
        .bind(row.item)
        .bind(row.descricao)
        .bind(row.localizacao)
        .bind(row.responsavel)
        .bind(row.data_entrada)
        .bind(row.status)
        .bind(row.quantidade)
        .bind(row.consumo)
        .bind(row.imobilizado)
        .bind(row.observacao)
        .execute(&mut *tx)
        .await?;
        summary.estoque += result.rows_affected();
    }

    for row in sample_comodato() {
        let result = sqlx::query(
            r#"INSERT INTO comodato_items
                (categoria, item, descricao, quantidade, fornecedor,
                 data_locacao, data_devolucao, responsavel, observacoes)
               SELECT $1, $2, $3, $4, $5, $6::date, $7::date, $8, $9
               WHERE NOT EXISTS (
                   SELECT 1 FROM comodato_items WHERE item = $2 AND fornecedor = $5
               )"#,
        )
        .bind(row.categoria)
        .bind(row.item)
        .bind(row.descricao)
        .bind(row.quantidade)
        .bind(row.fornecedor)
        .bind(row.data_locacao)
        .bind(row.data_devolucao)
        .bind(row.responsavel)
        .bind(row.observacoes)
        .execute(&mut *tx)
        .await?;
        summary.comodato += result.rows_affected();
    }

    for row in sample_movimentacoes() {
        let result = sqlx::query(
            r#"INSERT INTO movimentacoes
                (patrimonio, categoria, item, descricao, responsavel,
                 data_entrada, data_saida, data_movimentacao, localizacao, status)
               SELECT $1, $2, $3, $4, $5, $6::date, $7::date,
                      $8::timestamp AT TIME ZONE 'America/Sao_Paulo', $9, $10
               WHERE NOT EXISTS (SELECT 1 FROM movimentacoes WHERE patrimonio = $1)"#,
        )
        .bind(row.patrimonio)
        .bind(row.categoria)
        .bind(row.item)
        .bind(row.descricao)
        .bind(row.responsavel)
        .bind(row.data_entrada)
        .bind(row.data_saida)
        .bind(row.data_movimentacao)
        .bind(row.localizacao)
        .bind(row.status)
        .execute(&mut *tx)
        .await?;
        summary.movimentacoes += result.rows_affected();
    }

    tx.commit().await?;
    Ok(summary)
}

/// Deletes the sample rows (and only those).
pub async fn clear_sample_data(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    for row in sample_estoque() {
        summary.estoque += sqlx::query("DELETE FROM estoque_items WHERE patrimonio = $1")
            .bind(row.patrimonio)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    for row in sample_comodato() {
        summary.comodato +=
            sqlx::query("DELETE FROM comodato_items WHERE item = $1 AND fornecedor = $2")
                .bind(row.item)
                .bind(row.fornecedor)
                .execute(&mut *tx)
                .await?
                .rows_affected();
    }
    for row in sample_movimentacoes() {
        summary.movimentacoes += sqlx::query("DELETE FROM movimentacoes WHERE patrimonio = $1")
            .bind(row.patrimonio)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    Ok(summary)
}
