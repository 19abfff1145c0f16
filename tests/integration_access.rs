mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{MemoryAccessStore, send, setup_app_with_store, token_for};
use estoque_models::{PermissionSet, UserId};

#[tokio::test]
async fn test_me_without_token_is_anonymous() {
    let store = Arc::new(MemoryAccessStore::new());
    let app = setup_app_with_store(store.clone());

    let (status, body) = send(app, "GET", "/api/access/me", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "is_admin": false, "permissions": null, "loading": false })
    );
    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_me_for_admin() {
    let store = Arc::new(MemoryAccessStore::new());
    let user_id = UserId::new();
    store.grant_admin(user_id);
    let app = setup_app_with_store(store.clone());

    let (status, body) = send(app, "GET", "/api/access/me", Some(&token_for(user_id)), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_admin"], true);
    assert_eq!(body["loading"], false);
    let permissions = body["permissions"].as_object().unwrap();
    assert_eq!(permissions.len(), 13);
    assert!(permissions.values().all(|v| v == &Value::Bool(true)));
    assert_eq!(store.permission_calls(), 0);
}

#[tokio::test]
async fn test_me_for_user_without_row_returns_defaults() {
    let store = Arc::new(MemoryAccessStore::new());
    let user_id = UserId::new();
    let app = setup_app_with_store(store.clone());

    let (status, body) = send(app, "GET", "/api/access/me", Some(&token_for(user_id)), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_admin"], false);
    assert_eq!(body["permissions"]["can_view_estoque"], true);
    assert_eq!(body["permissions"]["can_view_dashboard"], true);
    assert_eq!(body["permissions"]["can_add_estoque"], false);
    assert_eq!(body["permissions"]["can_delete_comodato"], false);
    assert!(!store.has_row(user_id));
}

#[tokio::test]
async fn test_me_with_invalid_token_is_unauthorized() {
    let store = Arc::new(MemoryAccessStore::new());
    let app = setup_app_with_store(store.clone());

    let (status, body) = send(app, "GET", "/api/access/me", Some("not-a-jwt"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_me_reports_lookup_failure_as_server_error() {
    let store = Arc::new(MemoryAccessStore::new());
    store.fail_role_lookups();
    let app = setup_app_with_store(store);

    let (status, body) =
        send(app, "GET", "/api/access/me", Some(&token_for(UserId::new())), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("role lookup failed"));
}

#[tokio::test]
async fn test_gate_requires_token() {
    let app = setup_app_with_store(Arc::new(MemoryAccessStore::new()));

    let (status, _) = send(app, "GET", "/api/estoque", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_rejects_missing_view_permission() {
    let store = Arc::new(MemoryAccessStore::new());
    let user_id = UserId::new();
    store.store_permissions(user_id, PermissionSet::none());
    let app = setup_app_with_store(store);

    let (status, body) = send(app, "GET", "/api/estoque", Some(&token_for(user_id)), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("estoque:view"));
}

#[tokio::test]
async fn test_default_permissions_cannot_write() {
    let store = Arc::new(MemoryAccessStore::new());
    let user_id = UserId::new();
    let token = token_for(user_id);
    let payload = json!({ "item": "Mouse", "quantidade": 4 });

    for (method, uri, permission) in [
        ("POST", "/api/estoque", "estoque:add"),
        ("POST", "/api/comodato", "comodato:add"),
        ("POST", "/api/movimentados", "movimentados:add"),
    ] {
        let app = setup_app_with_store(store.clone());
        let (status, body) = send(app, method, uri, Some(&token), Some(payload.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
        assert!(body["error"].as_str().unwrap().contains(permission));
    }
}

#[tokio::test]
async fn test_dashboard_gate_uses_its_own_flag() {
    let store = Arc::new(MemoryAccessStore::new());
    let user_id = UserId::new();
    store.store_permissions(
        user_id,
        PermissionSet {
            can_view_dashboard: false,
            ..PermissionSet::all_granted()
        },
    );
    let app = setup_app_with_store(store);

    let (status, _) = send(app, "GET", "/api/dashboard", Some(&token_for(user_id)), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_routes_reject_non_admin_with_full_row() {
    let store = Arc::new(MemoryAccessStore::new());
    let user_id = UserId::new();
    store.store_permissions(user_id, PermissionSet::all_granted());
    let app = setup_app_with_store(store);

    let (status, body) =
        send(app, "GET", "/api/admin/users", Some(&token_for(user_id)), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("Administrator"));
}

#[tokio::test]
async fn test_admin_cannot_revoke_self() {
    let store = Arc::new(MemoryAccessStore::new());
    let user_id = UserId::new();
    store.grant_admin(user_id);
    let app = setup_app_with_store(store);

    let uri = format!("/api/admin/users/{}/admin", user_id);
    let (status, body) = send(app, "DELETE", &uri, Some(&token_for(user_id)), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("cannot revoke"));
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let store = Arc::new(MemoryAccessStore::new());
    let user_id = UserId::new();
    store.grant_admin(user_id);
    let app = setup_app_with_store(store);

    let uri = format!("/api/admin/users/{}", user_id);
    let (status, _) = send(app, "DELETE", &uri, Some(&token_for(user_id)), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = setup_app_with_store(Arc::new(MemoryAccessStore::new()));

    let (status, body) = send(app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
