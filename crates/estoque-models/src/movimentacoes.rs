//! Movement history: equipment that left the inventory.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use estoque_core::PaginationMeta;

use crate::ids::MovimentacaoId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movimentacao {
    pub id: MovimentacaoId,
    pub patrimonio: String,
    pub categoria: String,
    pub item: String,
    pub descricao: String,
    pub responsavel: String,
    pub data_entrada: Option<NaiveDate>,
    pub data_saida: Option<NaiveDate>,
    pub data_movimentacao: DateTime<Utc>,
    pub localizacao: String,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedMovimentacoesResponse {
    pub data: Vec<Movimentacao>,
    pub meta: PaginationMeta,
}

fn validate_dates(dto: &CreateMovimentacaoDto) -> Result<(), ValidationError> {
    match (dto.data_entrada, dto.data_saida) {
        (Some(entrada), Some(saida)) if saida < entrada => {
            let mut err = ValidationError::new("movement_dates");
            err.message = Some("data_saida must not be before data_entrada".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_dates"))]
pub struct CreateMovimentacaoDto {
    #[validate(length(min = 1, max = 50, message = "patrimonio is required"))]
    pub patrimonio: String,
    #[serde(default)]
    pub categoria: String,
    #[validate(length(min = 1, max = 200, message = "item is required"))]
    pub item: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub responsavel: String,
    pub data_entrada: Option<NaiveDate>,
    pub data_saida: Option<NaiveDate>,
    /// Defaults to now
    pub data_movimentacao: Option<DateTime<Utc>>,
    #[serde(default)]
    pub localizacao: String,
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_patrimonio() {
        let dto: CreateMovimentacaoDto =
            serde_json::from_str(r#"{"patrimonio":"","item":"Dell Inspiron 15"}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_rejects_exit_before_entry() {
        let dto: CreateMovimentacaoDto = serde_json::from_str(
            r#"{"patrimonio":"NB005","item":"Dell Inspiron 15",
                "data_entrada":"2024-03-15","data_saida":"2024-01-10"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_valid() {
        let dto: CreateMovimentacaoDto = serde_json::from_str(
            r#"{"patrimonio":"NB005","item":"Dell Inspiron 15",
                "data_entrada":"2024-01-10","data_saida":"2024-03-15",
                "data_movimentacao":"2024-03-15T14:30:00Z","localizacao":"Setor Financeiro"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.data_movimentacao.is_some());
    }
}
