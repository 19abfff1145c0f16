//! Equipment held under a loan or rental contract (comodato).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use estoque_core::serde::deserialize_nullable;

use crate::estoque::validate_non_zero;
use crate::ids::ComodatoItemId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ComodatoItem {
    pub id: ComodatoItemId,
    pub categoria: String,
    pub item: String,
    pub descricao: String,
    pub quantidade: i32,
    /// Supplier that owns the equipment
    pub fornecedor: String,
    pub data_locacao: Option<NaiveDate>,
    pub data_devolucao: Option<NaiveDate>,
    pub responsavel: String,
    pub observacoes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComodatoListResponse {
    pub data: Vec<ComodatoItem>,
    pub total: usize,
}

/// The return date may not precede the rental date.
pub fn check_rental_period(
    data_locacao: Option<NaiveDate>,
    data_devolucao: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match (data_locacao, data_devolucao) {
        (Some(inicio), Some(fim)) if fim < inicio => {
            let mut err = ValidationError::new("rental_period");
            err.message = Some("data_devolucao must not be before data_locacao".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

fn validate_create_period(dto: &CreateComodatoItemDto) -> Result<(), ValidationError> {
    check_rental_period(dto.data_locacao, dto.data_devolucao)
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_period"))]
pub struct CreateComodatoItemDto {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub categoria: String,
    #[validate(length(min = 1, max = 200, message = "item is required"))]
    pub item: String,
    #[serde(default)]
    pub descricao: String,
    #[validate(custom(function = "validate_non_zero"))]
    pub quantidade: i32,
    #[validate(length(min = 1, max = 200, message = "fornecedor is required"))]
    pub fornecedor: String,
    pub data_locacao: Option<NaiveDate>,
    pub data_devolucao: Option<NaiveDate>,
    #[serde(default)]
    pub responsavel: String,
    #[serde(default)]
    pub observacoes: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateComodatoItemDto {
    #[validate(length(max = 100))]
    pub categoria: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub item: Option<String>,
    pub descricao: Option<String>,
    #[validate(custom(function = "validate_non_zero"))]
    pub quantidade: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub fornecedor: Option<String>,
    /// Absent keeps the stored date, `null` clears it
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>, format = Date)]
    pub data_locacao: Option<Option<NaiveDate>>,
    /// Absent keeps the stored date, `null` clears it
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>, format = Date)]
    pub data_devolucao: Option<Option<NaiveDate>>,
    pub responsavel: Option<String>,
    pub observacoes: Option<String>,
}

impl UpdateComodatoItemDto {
    /// Applies the present fields. The merged dates are checked here
    /// because either one may come from the stored row.
    pub fn apply(self, item: &mut ComodatoItem) -> Result<(), ValidationError> {
        let data_locacao = self.data_locacao.unwrap_or(item.data_locacao);
        let data_devolucao = self.data_devolucao.unwrap_or(item.data_devolucao);
        check_rental_period(data_locacao, data_devolucao)?;

        if let Some(v) = self.categoria {
            item.categoria = v;
        }
        if let Some(v) = self.item {
            item.item = v;
        }
        if let Some(v) = self.descricao {
            item.descricao = v;
        }
        if let Some(v) = self.quantidade {
            item.quantidade = v;
        }
        if let Some(v) = self.fornecedor {
            item.fornecedor = v;
        }
        if let Some(v) = self.responsavel {
            item.responsavel = v;
        }
        if let Some(v) = self.observacoes {
            item.observacoes = v;
        }
        item.data_locacao = data_locacao;
        item.data_devolucao = data_devolucao;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn impressora() -> ComodatoItem {
        ComodatoItem {
            id: ComodatoItemId::new(),
            categoria: "Impressora".to_string(),
            item: "Multifuncional HP LaserJet".to_string(),
            descricao: "Impressora, scanner e copiadora".to_string(),
            quantidade: 2,
            fornecedor: "HP Rental Services".to_string(),
            data_locacao: Some(date(2024, 1, 1)),
            data_devolucao: Some(date(2024, 12, 31)),
            responsavel: "TI - João Silva".to_string(),
            observacoes: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_rental_period() {
        assert!(check_rental_period(Some(date(2024, 1, 1)), Some(date(2024, 1, 1))).is_ok());
        assert!(check_rental_period(Some(date(2024, 2, 1)), Some(date(2024, 1, 1))).is_err());
        assert!(check_rental_period(None, Some(date(2024, 1, 1))).is_ok());
        assert!(check_rental_period(Some(date(2024, 1, 1)), None).is_ok());
    }

    #[test]
    fn test_create_requires_fornecedor() {
        let dto: CreateComodatoItemDto =
            serde_json::from_str(r#"{"item":"Projetor","quantidade":1,"fornecedor":""}"#)
                .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_rejects_inverted_period() {
        let dto: CreateComodatoItemDto = serde_json::from_str(
            r#"{"item":"Projetor","quantidade":1,"fornecedor":"Epson",
                "data_locacao":"2024-05-10","data_devolucao":"2024-05-01"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_valid() {
        let dto: CreateComodatoItemDto = serde_json::from_str(
            r#"{"item":"Projetor","quantidade":1,"fornecedor":"Epson"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_checks_merged_dates() {
        let mut item = impressora();
        let dto = UpdateComodatoItemDto {
            data_devolucao: Some(Some(date(2023, 12, 1))),
            ..Default::default()
        };
        assert!(dto.apply(&mut item).is_err());
        assert_eq!(item.data_devolucao, Some(date(2024, 12, 31)));

        let dto = UpdateComodatoItemDto {
            data_devolucao: Some(Some(date(2025, 6, 30))),
            quantidade: Some(3),
            ..Default::default()
        };
        dto.apply(&mut item).unwrap();
        assert_eq!(item.data_devolucao, Some(date(2025, 6, 30)));
        assert_eq!(item.quantidade, 3);
    }

    #[test]
    fn test_update_null_clears_date() {
        let mut item = impressora();
        let dto: UpdateComodatoItemDto =
            serde_json::from_str(r#"{"data_devolucao":null}"#).unwrap();
        dto.apply(&mut item).unwrap();
        assert_eq!(item.data_devolucao, None);
        assert_eq!(item.data_locacao, Some(date(2024, 1, 1)));

        let dto: UpdateComodatoItemDto = serde_json::from_str(r#"{"quantidade":5}"#).unwrap();
        dto.apply(&mut item).unwrap();
        assert_eq!(item.data_locacao, Some(date(2024, 1, 1)));
        assert_eq!(item.data_devolucao, None);
    }
}
