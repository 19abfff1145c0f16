mod common;

use common::MemoryAccessStore;
use estoque::modules::access::{AccessError, Lookup, resolve};
use estoque_models::{AccessState, Action, Module, PermissionSet, UserId, default_permissions};

fn edit_comodato_only() -> PermissionSet {
    PermissionSet {
        can_edit_comodato: true,
        ..PermissionSet::none()
    }
}

#[tokio::test]
async fn test_no_user_resolves_idle_without_store_calls() {
    let store = MemoryAccessStore::new();

    let state = resolve(&store, None).await.unwrap();

    assert_eq!(state, AccessState::anonymous());
    assert!(!state.is_admin);
    assert!(state.permissions.is_none());
    assert!(!state.loading);
    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_admin_gets_every_permission() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();
    store.grant_admin(user_id);

    let state = resolve(&store, Some(user_id)).await.unwrap();

    assert!(state.is_admin);
    assert_eq!(state.permissions, Some(PermissionSet::all_granted()));
    assert!(!state.loading);
}

#[tokio::test]
async fn test_admin_ignores_stored_row_and_skips_permission_lookup() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();
    store.grant_admin(user_id);
    store.store_permissions(user_id, PermissionSet::none());

    let state = resolve(&store, Some(user_id)).await.unwrap();

    assert_eq!(state.permissions, Some(PermissionSet::all_granted()));
    assert_eq!(store.role_calls(), 1);
    assert_eq!(store.permission_calls(), 0);
}

#[tokio::test]
async fn test_non_admin_without_row_gets_defaults() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();

    let state = resolve(&store, Some(user_id)).await.unwrap();

    assert!(!state.is_admin);
    assert_eq!(state.permissions, Some(default_permissions()));
    let permissions = state.permissions.unwrap();
    assert!(permissions.allows(Module::Estoque, Action::View));
    assert!(!permissions.allows(Module::Estoque, Action::Add));
    assert!(!store.has_row(user_id));
}

#[tokio::test]
async fn test_non_admin_with_row_gets_row_unchanged() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();
    store.store_permissions(user_id, edit_comodato_only());

    let state = resolve(&store, Some(user_id)).await.unwrap();

    assert!(!state.is_admin);
    let permissions = state.permissions.unwrap();
    assert_eq!(permissions, edit_comodato_only());
    assert!(permissions.can_edit_comodato);
    assert!(!permissions.can_view_estoque);
}

#[tokio::test]
async fn test_revoke_without_row_falls_back_to_defaults() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();
    store.grant_admin(user_id);
    assert!(resolve(&store, Some(user_id)).await.unwrap().is_admin);

    store.revoke_admin(user_id);
    let state = resolve(&store, Some(user_id)).await.unwrap();

    assert!(!state.is_admin);
    assert_eq!(state.permissions, Some(default_permissions()));
    assert!(!store.has_row(user_id));
}

#[tokio::test]
async fn test_revoke_keeps_previously_stored_row() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();
    store.store_permissions(user_id, edit_comodato_only());
    store.grant_admin(user_id);

    store.revoke_admin(user_id);
    let state = resolve(&store, Some(user_id)).await.unwrap();

    assert_eq!(state.permissions, Some(edit_comodato_only()));
}

#[tokio::test]
async fn test_role_lookup_failure_is_reported() {
    let store = MemoryAccessStore::new();
    store.fail_role_lookups();
    let user_id = UserId::new();

    let err = resolve(&store, Some(user_id)).await.unwrap_err();

    let AccessError::LookupFailure {
        user_id: failed_for,
        lookup,
        ..
    } = err;
    assert_eq!(failed_for, user_id);
    assert_eq!(lookup, Lookup::Role);
    assert_eq!(store.permission_calls(), 0);
}

#[tokio::test]
async fn test_permission_lookup_failure_does_not_fall_back() {
    let store = MemoryAccessStore::new();
    store.fail_permission_lookups();

    let err = resolve(&store, Some(UserId::new())).await.unwrap_err();

    let AccessError::LookupFailure { lookup, .. } = err;
    assert_eq!(lookup, Lookup::Permissions);
}
