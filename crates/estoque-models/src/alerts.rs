//! Stock alert classification.
//!
//! A quantity maps to exactly one [`AlertLevel`]:
//!
//! | quantity      | level      | label           |
//! |---------------|------------|-----------------|
//! | `< 5`         | `Critical` | "Baixo Estoque" |
//! | `5 ..= 10`    | `Warning`  | "Atenção"       |
//! | `> 10`        | `Ok`       | "OK"            |
//!
//! Negative quantities are `Critical`. The level is always derived, never
//! stored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quantities strictly below this are critical.
pub const CRITICAL_BELOW: i64 = 5;
/// Quantities up to and including this are a warning.
pub const WARNING_UP_TO: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Critical,
    Warning,
    Ok,
}

pub fn classify(quantity: i64) -> AlertLevel {
    if quantity < CRITICAL_BELOW {
        AlertLevel::Critical
    } else if quantity <= WARNING_UP_TO {
        AlertLevel::Warning
    } else {
        AlertLevel::Ok
    }
}

impl AlertLevel {
    pub const ALL: [AlertLevel; 3] = [AlertLevel::Ok, AlertLevel::Warning, AlertLevel::Critical];

    pub fn classify(quantity: i64) -> Self {
        classify(quantity)
    }

    /// Higher is more severe.
    pub fn severity(self) -> u8 {
        match self {
            AlertLevel::Critical => 2,
            AlertLevel::Warning => 1,
            AlertLevel::Ok => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlertLevel::Critical => "Baixo Estoque",
            AlertLevel::Warning => "Atenção",
            AlertLevel::Ok => "OK",
        }
    }
}

impl PartialOrd for AlertLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlertLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.severity().cmp(&other.severity())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertClassification {
    pub quantity: i64,
    pub level: AlertLevel,
    pub label: String,
}

impl AlertClassification {
    pub fn for_quantity(quantity: i64) -> Self {
        let level = classify(quantity);
        Self {
            quantity,
            level,
            label: level.label().to_string(),
        }
    }
}
