//! Per-module permission flags.
//!
//! A [`PermissionSet`] holds one flag per (module, action) pair. The
//! dashboard only has `view`; every other module has the four CRUD
//! actions. Field names match the `user_permissions` columns and the JSON
//! the UI exchanges, e.g. `can_edit_comodato`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Estoque,
    Movimentados,
    Comodato,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Add,
    Edit,
    Delete,
}

impl Module {
    pub const ALL: [Module; 4] = [
        Module::Estoque,
        Module::Movimentados,
        Module::Comodato,
        Module::Dashboard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Module::Estoque => "estoque",
            Module::Movimentados => "movimentados",
            Module::Comodato => "comodato",
            Module::Dashboard => "dashboard",
        }
    }

    /// Actions that exist for this module.
    pub fn actions(self) -> &'static [Action] {
        match self {
            Module::Dashboard => &[Action::View],
            _ => &Action::ALL,
        }
    }
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Add, Action::Edit, Action::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Add => "add",
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PermissionSet {
    pub can_view_estoque: bool,
    pub can_add_estoque: bool,
    pub can_edit_estoque: bool,
    pub can_delete_estoque: bool,
    pub can_view_movimentados: bool,
    pub can_add_movimentados: bool,
    pub can_edit_movimentados: bool,
    pub can_delete_movimentados: bool,
    pub can_view_comodato: bool,
    pub can_add_comodato: bool,
    pub can_edit_comodato: bool,
    pub can_delete_comodato: bool,
    pub can_view_dashboard: bool,
}

/// What a non-admin without a stored row gets: every module visible,
/// nothing writable. Never persisted on its own.
pub fn default_permissions() -> PermissionSet {
    PermissionSet {
        can_view_estoque: true,
        can_view_movimentados: true,
        can_view_comodato: true,
        can_view_dashboard: true,
        ..PermissionSet::none()
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        default_permissions()
    }
}

impl PermissionSet {
    pub fn none() -> Self {
        Self::uniform(false)
    }

    pub fn all_granted() -> Self {
        Self::uniform(true)
    }

    fn uniform(value: bool) -> Self {
        Self {
            can_view_estoque: value,
            can_add_estoque: value,
            can_edit_estoque: value,
            can_delete_estoque: value,
            can_view_movimentados: value,
            can_add_movimentados: value,
            can_edit_movimentados: value,
            can_delete_movimentados: value,
            can_view_comodato: value,
            can_add_comodato: value,
            can_edit_comodato: value,
            can_delete_comodato: value,
            can_view_dashboard: value,
        }
    }

    /// The flag for `(module, action)`, or `None` when the pair does not exist.
    pub fn flag(&self, module: Module, action: Action) -> Option<bool> {
        let mut copy = *self;
        copy.flag_mut(module, action).map(|f| *f)
    }

    pub fn flag_mut(&mut self, module: Module, action: Action) -> Option<&mut bool> {
        let slot = match (module, action) {
            (Module::Estoque, Action::View) => &mut self.can_view_estoque,
            (Module::Estoque, Action::Add) => &mut self.can_add_estoque,
            (Module::Estoque, Action::Edit) => &mut self.can_edit_estoque,
            (Module::Estoque, Action::Delete) => &mut self.can_delete_estoque,
            (Module::Movimentados, Action::View) => &mut self.can_view_movimentados,
            (Module::Movimentados, Action::Add) => &mut self.can_add_movimentados,
            (Module::Movimentados, Action::Edit) => &mut self.can_edit_movimentados,
            (Module::Movimentados, Action::Delete) => &mut self.can_delete_movimentados,
            (Module::Comodato, Action::View) => &mut self.can_view_comodato,
            (Module::Comodato, Action::Add) => &mut self.can_add_comodato,
            (Module::Comodato, Action::Edit) => &mut self.can_edit_comodato,
            (Module::Comodato, Action::Delete) => &mut self.can_delete_comodato,
            (Module::Dashboard, Action::View) => &mut self.can_view_dashboard,
            (Module::Dashboard, _) => return None,
        };
        Some(slot)
    }

    /// Pairs that do not exist are never allowed.
    pub fn allows(&self, module: Module, action: Action) -> bool {
        self.flag(module, action).unwrap_or(false)
    }

    /// Returns `false` (and changes nothing) when the pair does not exist.
    pub fn set(&mut self, module: Module, action: Action, value: bool) -> bool {
        match self.flag_mut(module, action) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Every existing pair, in module order.
    pub fn pairs() -> impl Iterator<Item = (Module, Action)> {
        Module::ALL
            .into_iter()
            .flat_map(|m| m.actions().iter().map(move |a| (m, *a)))
    }

    /// `"module:action"` strings for the granted pairs.
    pub fn granted(&self) -> Vec<String> {
        Self::pairs()
            .filter(|(m, a)| self.allows(*m, *a))
            .map(|(m, a)| format!("{}:{}", m.as_str(), a.as_str()))
            .collect()
    }
}

/// A stored `user_permissions` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserPermissionRow {
    pub user_id: UserId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub permissions: PermissionSet,
}

/// Permission editor payload: the stored row, or the default set when the
/// user has none yet (`stored = false`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPermissionsResponse {
    pub user_id: UserId,
    pub stored: bool,
    pub permissions: PermissionSet,
}

/// Body of a permission save. All 13 flags are required and written
/// wholesale. Presence is enforced by serde; `Validate` carries no rules
/// and only lets the body go through `ValidatedJson`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SavePermissionsDto {
    #[serde(flatten)]
    pub permissions: PermissionSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_views_only() {
        let defaults = default_permissions();
        for (module, action) in PermissionSet::pairs() {
            assert_eq!(
                defaults.allows(module, action),
                action == Action::View,
                "{}:{}",
                module.as_str(),
                action.as_str()
            );
        }
    }

    #[test]
    fn test_default_trait_matches_default_permissions() {
        assert_eq!(PermissionSet::default(), default_permissions());
    }

    #[test]
    fn test_all_granted_allows_every_pair() {
        let all = PermissionSet::all_granted();
        assert!(PermissionSet::pairs().all(|(m, a)| all.allows(m, a)));
    }

    #[test]
    fn test_pairs_count() {
        assert_eq!(PermissionSet::pairs().count(), 13);
    }

    #[test]
    fn test_dashboard_only_has_view() {
        let mut all = PermissionSet::all_granted();
        assert!(all.allows(Module::Dashboard, Action::View));
        assert!(!all.allows(Module::Dashboard, Action::Delete));
        assert_eq!(all.flag(Module::Dashboard, Action::Add), None);
        assert!(!all.set(Module::Dashboard, Action::Edit, false));
        assert_eq!(all, PermissionSet::all_granted());
    }

    #[test]
    fn test_set_flag() {
        let mut perms = default_permissions();
        assert!(perms.set(Module::Comodato, Action::Edit, true));
        assert!(perms.can_edit_comodato);
        assert!(perms.allows(Module::Comodato, Action::Edit));
        assert!(!perms.allows(Module::Estoque, Action::Edit));
    }

    #[test]
    fn test_granted_strings() {
        let perms = PermissionSet {
            can_add_estoque: true,
            ..PermissionSet::none()
        };
        assert_eq!(perms.granted(), vec!["estoque:add".to_string()]);
    }

    #[test]
    fn test_row_serializes_flat() {
        let row = UserPermissionRow {
            user_id: UserId::from_uuid(uuid::Uuid::nil()),
            permissions: default_permissions(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["can_view_estoque"], true);
        assert_eq!(value["can_delete_comodato"], false);
        assert!(value.get("permissions").is_none());
    }

    #[test]
    fn test_save_dto_requires_every_flag() {
        let err = serde_json::from_str::<SavePermissionsDto>(r#"{"can_view_estoque":true}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }
}
