//! IT asset inventory.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use estoque_core::serde::{deserialize_optional_string, deserialize_untrimmed_string};

use crate::alerts::{AlertLevel, classify};
use crate::ids::EstoqueItemId;

pub const DEFAULT_STATUS: &str = "Disponível";
/// Filter value meaning "no restriction".
pub const FILTER_ALL: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EstoqueItem {
    pub id: EstoqueItemId,
    /// Asset tag (patrimônio)
    pub patrimonio: String,
    pub categoria: String,
    pub item: String,
    pub descricao: String,
    pub localizacao: String,
    pub responsavel: String,
    pub data_entrada: NaiveDate,
    pub status: String,
    pub quantidade: i32,
    /// Consumable rather than durable
    pub consumo: bool,
    /// Registered as a fixed asset
    pub imobilizado: bool,
    pub observacao: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EstoqueItem {
    pub fn alert(&self) -> AlertLevel {
        classify(i64::from(self.quantidade))
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EstoqueItemResponse {
    #[serde(flatten)]
    pub item: EstoqueItem,
    pub alert: AlertLevel,
    pub alert_label: String,
}

impl From<EstoqueItem> for EstoqueItemResponse {
    fn from(item: EstoqueItem) -> Self {
        let alert = item.alert();
        Self {
            item,
            alert,
            alert_label: alert.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EstoqueListResponse {
    pub data: Vec<EstoqueItemResponse>,
    pub total: usize,
}

pub(crate) fn validate_non_zero(value: i32) -> Result<(), ValidationError> {
    if value == 0 {
        let mut err = ValidationError::new("non_zero");
        err.message = Some("quantidade must not be zero".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEstoqueItemDto {
    #[serde(default)]
    #[validate(length(max = 50))]
    pub patrimonio: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub categoria: String,
    #[validate(length(min = 1, max = 200, message = "item is required"))]
    pub item: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub localizacao: String,
    #[serde(default)]
    pub responsavel: String,
    /// Defaults to today
    pub data_entrada: Option<NaiveDate>,
    /// Defaults to "Disponível"
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
    #[validate(custom(function = "validate_non_zero"))]
    pub quantidade: i32,
    #[serde(default)]
    pub consumo: bool,
    #[serde(default)]
    pub imobilizado: bool,
    #[serde(default)]
    pub observacao: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEstoqueItemDto {
    #[validate(length(max = 50))]
    pub patrimonio: Option<String>,
    #[validate(length(max = 100))]
    pub categoria: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub item: Option<String>,
    pub descricao: Option<String>,
    pub localizacao: Option<String>,
    pub responsavel: Option<String>,
    pub data_entrada: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
    #[validate(custom(function = "validate_non_zero"))]
    pub quantidade: Option<i32>,
    pub consumo: Option<bool>,
    pub imobilizado: Option<bool>,
    pub observacao: Option<String>,
}

impl UpdateEstoqueItemDto {
    pub fn apply(self, item: &mut EstoqueItem) {
        if let Some(v) = self.patrimonio {
            item.patrimonio = v;
        }
        if let Some(v) = self.categoria {
            item.categoria = v;
        }
        if let Some(v) = self.item {
            item.item = v;
        }
        if let Some(v) = self.descricao {
            item.descricao = v;
        }
        if let Some(v) = self.localizacao {
            item.localizacao = v;
        }
        if let Some(v) = self.responsavel {
            item.responsavel = v;
        }
        if let Some(v) = self.data_entrada {
            item.data_entrada = v;
        }
        if let Some(v) = self.status {
            item.status = v;
        }
        if let Some(v) = self.quantidade {
            item.quantidade = v;
        }
        if let Some(v) = self.consumo {
            item.consumo = v;
        }
        if let Some(v) = self.imobilizado {
            item.imobilizado = v;
        }
        if let Some(v) = self.observacao {
            item.observacao = v;
        }
    }
}

/// List filter for the inventory screen.
///
/// `search` is a case-insensitive substring match over item name,
/// patrimônio and categoria, using the term exactly as typed. `categoria`
/// and `status` must match exactly unless absent, empty or `todos`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EstoqueFilter {
    #[serde(default, deserialize_with = "deserialize_untrimmed_string")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

fn exact_or_all(filter: &Option<String>, value: &str) -> bool {
    match filter.as_deref() {
        None | Some(FILTER_ALL) => true,
        Some(expected) => expected == value,
    }
}

impl EstoqueFilter {
    pub fn matches(&self, item: &EstoqueItem) -> bool {
        let matches_search = match self.search.as_deref() {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                item.item.to_lowercase().contains(&term)
                    || item.patrimonio.to_lowercase().contains(&term)
                    || item.categoria.to_lowercase().contains(&term)
            }
        };

        matches_search
            && exact_or_all(&self.categoria, &item.categoria)
            && exact_or_all(&self.status, &item.status)
    }

    pub fn apply<I>(&self, items: I) -> Vec<EstoqueItem>
    where
        I: IntoIterator<Item = EstoqueItem>,
    {
        items.into_iter().filter(|i| self.matches(i)).collect()
    }
}
