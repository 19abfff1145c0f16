//! # Estoque Models
//!
//! Domain models and DTOs for the Estoque TI API.
//!
//! - [`access`]: resolved access state returned to clients
//! - [`alerts`]: stock alert classification
//! - [`comodato`]: loaned/rented equipment
//! - [`dashboard`]: chart aggregates
//! - [`estoque`]: IT asset inventory and its list filter
//! - [`ids`]: strongly-typed identifiers
//! - [`movimentacoes`]: movement history
//! - [`permissions`]: per-module permission flags
//! - [`profiles`]: user profiles and the administration listing
//! - [`roles`]: the admin role tag

pub mod access;
pub mod alerts;
pub mod comodato;
pub mod dashboard;
pub mod estoque;
pub mod ids;
pub mod movimentacoes;
pub mod permissions;
pub mod profiles;
pub mod roles;

pub use access::AccessState;
pub use alerts::{AlertLevel, classify};
pub use ids::{ComodatoItemId, EstoqueItemId, MovimentacaoId, UserId};
pub use permissions::{Action, Module, PermissionSet, default_permissions};
pub use roles::AppRole;
