//! Dashboard chart data, computed from the current inventory.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::alerts::AlertLevel;
use crate::estoque::EstoqueItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoriaTotal {
    pub name: String,
    pub quantidade: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlertaCount {
    pub level: AlertLevel,
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    /// Sum of quantities per category
    pub categorias: Vec<CategoriaTotal>,
    /// Number of items per status
    pub status: Vec<StatusCount>,
    /// Number of items per alert level, always all three levels
    pub alertas: Vec<AlertaCount>,
    pub last_update: DateTime<Utc>,
}

impl DashboardResponse {
    pub fn summarize<'a, I>(items: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = &'a EstoqueItem>,
    {
        let mut categorias: BTreeMap<String, i64> = BTreeMap::new();
        let mut status: BTreeMap<String, i64> = BTreeMap::new();
        let mut alertas: BTreeMap<AlertLevel, i64> = BTreeMap::new();

        for item in items {
            *categorias.entry(item.categoria.clone()).or_default() += i64::from(item.quantidade);
            *status.entry(item.status.clone()).or_default() += 1;
            *alertas.entry(item.alert()).or_default() += 1;
        }

        let alertas = AlertLevel::ALL
            .into_iter()
            .map(|level| AlertaCount {
                level,
                name: level.label().to_string(),
                value: alertas.get(&level).copied().unwrap_or(0),
            })
            .collect();

        Self {
            categorias: categorias
                .into_iter()
                .map(|(name, quantidade)| CategoriaTotal { name, quantidade })
                .collect(),
            status: status
                .into_iter()
                .map(|(name, value)| StatusCount { name, value })
                .collect(),
            alertas,
            last_update: now,
        }
    }
}
