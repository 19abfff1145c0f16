mod common;

use common::MemoryAccessStore;
use estoque::modules::access::{AccessPhase, AccessSession, resolve};
use estoque_models::{AccessState, PermissionSet, UserId, default_permissions};

#[tokio::test]
async fn test_refresh_without_identity_is_idle_and_skips_store() {
    let store = MemoryAccessStore::new();
    let session = AccessSession::new();

    let snapshot = session.refresh(&store, None).await;

    assert_eq!(snapshot.phase, AccessPhase::Idle);
    assert_eq!(snapshot.state, AccessState::anonymous());
    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_refresh_resolves_admin() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();
    store.grant_admin(user_id);
    let session = AccessSession::new();

    let snapshot = session.refresh(&store, Some(user_id)).await;

    assert_eq!(snapshot.phase, AccessPhase::Resolved);
    assert_eq!(snapshot.identity, Some(user_id));
    assert!(snapshot.state.is_admin);
    assert!(!snapshot.state.loading);
}

#[tokio::test]
async fn test_slow_resolution_for_previous_user_is_discarded() {
    let store = MemoryAccessStore::new();
    let admin = UserId::new();
    let regular = UserId::new();
    store.grant_admin(admin);
    let session = AccessSession::new();

    let admin_ticket = session.begin(Some(admin));
    let admin_outcome = resolve(&store, Some(admin)).await;

    let regular_ticket = session.begin(Some(regular));
    let regular_outcome = resolve(&store, Some(regular)).await;
    assert!(session.complete(regular_ticket, regular_outcome));

    // the admin lookup finishes last
    assert!(!session.complete(admin_ticket, admin_outcome));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.identity, Some(regular));
    assert!(!snapshot.state.is_admin);
    assert_eq!(snapshot.state.permissions, Some(default_permissions()));
}

#[tokio::test]
async fn test_failure_keeps_last_known_permissions() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();
    let stored = PermissionSet {
        can_add_estoque: true,
        ..default_permissions()
    };
    store.store_permissions(user_id, stored);
    let session = AccessSession::new();
    session.refresh(&store, Some(user_id)).await;

    store.fail_permission_lookups();
    let snapshot = session.refresh(&store, Some(user_id)).await;

    assert_eq!(snapshot.phase, AccessPhase::Failed);
    assert_eq!(snapshot.state.permissions, Some(stored));
    assert!(!snapshot.state.loading);
    assert!(snapshot.error.unwrap().contains("permission lookup failed"));
}

#[tokio::test]
async fn test_failure_for_new_identity_has_no_permissions() {
    let store = MemoryAccessStore::new();
    let first = UserId::new();
    let second = UserId::new();
    store.grant_admin(first);
    let session = AccessSession::new();
    session.refresh(&store, Some(first)).await;

    store.fail_role_lookups();
    let snapshot = session.refresh(&store, Some(second)).await;

    assert_eq!(snapshot.phase, AccessPhase::Failed);
    assert!(!snapshot.state.is_admin);
    assert_eq!(snapshot.state.permissions, None);
}

#[tokio::test]
async fn test_refresh_picks_up_permission_change() {
    let store = MemoryAccessStore::new();
    let user_id = UserId::new();
    let session = AccessSession::new();
    session.refresh(&store, Some(user_id)).await;
    assert_eq!(session.state().permissions, Some(default_permissions()));

    store.store_permissions(user_id, PermissionSet::none());
    session.refresh(&store, Some(user_id)).await;

    assert_eq!(session.state().permissions, Some(PermissionSet::none()));
}
