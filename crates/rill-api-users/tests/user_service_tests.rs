//! Service-level tests for User CRUD operations.
//!
//! These tests exercise `UserService` against the in-memory store,
//! verifying orchestration, the not-found signal and partial-update
//! merge semantics.

mod common;

use common::*;
use futures::TryStreamExt;
use rill_api_users::models::UserRequest;
use rill_api_users::services::UserService;
use rill_api_users::ApiUsersError;
use rill_store::User;

fn valid_request() -> UserRequest {
    UserRequest {
        name: Some("Usuário Teste".to_string()),
        email: Some("emailteste@mail.com".to_string()),
        password: Some("abcd1234".to_string()),
    }
}

#[tokio::test]
async fn save_returns_entity_with_assigned_id() {
    let store = test_store();
    let service = UserService::new(store);

    let user = service.save(&valid_request()).await.unwrap();

    let id = user.id.expect("save assigns an id");
    assert!(!id.is_empty());
    assert_eq!(user.name, "Usuário Teste");
    assert_eq!(user.email, "emailteste@mail.com");
    assert_eq!(user.password, "abcd1234");
}

#[tokio::test]
async fn find_by_id_returns_saved_user() {
    let store = test_store();
    let service = UserService::new(store);

    let saved = service.save(&valid_request()).await.unwrap();
    let id = saved.id.clone().unwrap();

    let found = service.find_by_id(&id).await.unwrap();
    assert_eq!(found, saved);
}

#[tokio::test]
async fn find_by_id_unknown_id_fails_with_fixed_message() {
    let store = test_store();
    let service = UserService::new(store);

    let err = service.find_by_id("ab12cd34e").await.unwrap_err();

    assert!(matches!(err, ApiUsersError::ObjectNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "Object not found. Id: ab12cd34e Type: User"
    );
}

#[tokio::test]
async fn find_all_yields_the_stored_documents() {
    let store = test_store();
    seed_user(
        &store,
        Some("ab12cd34"),
        "Usuário Teste",
        "emailteste@mail.com",
        "abcd1234",
    )
    .await;
    let service = UserService::new(store);

    let all: Vec<User> = service.find_all().await.try_collect().await.unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id.as_deref(), Some("ab12cd34"));
}

#[tokio::test]
async fn update_merges_present_fields_and_preserves_absent_ones() {
    let store = test_store();
    seed_user(
        &store,
        Some("ab12cd34"),
        "Nome Antigo",
        "antigo@mail.com",
        "senha1234",
    )
    .await;
    let service = UserService::new(store);

    let partial = UserRequest {
        name: Some("Nome Novo".to_string()),
        email: None,
        password: None,
    };
    let updated = service.update("ab12cd34", &partial).await.unwrap();

    assert_eq!(updated.name, "Nome Novo");
    assert_eq!(updated.email, "antigo@mail.com");
    assert_eq!(updated.password, "senha1234");

    // The merge is persisted, not just returned.
    let stored = service.find_by_id("ab12cd34").await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_unknown_id_fails_with_not_found() {
    let store = test_store();
    let service = UserService::new(store);

    let err = service
        .update("ab12cd34e", &valid_request())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Object not found. Id: ab12cd34e Type: User"
    );
}

#[tokio::test]
async fn update_with_empty_request_is_idempotent() {
    let store = test_store();
    let seeded = seed_user(
        &store,
        Some("ab12cd34"),
        "Usuário Teste",
        "emailteste@mail.com",
        "abcd1234",
    )
    .await;
    let service = UserService::new(store);

    let updated = service
        .update("ab12cd34", &UserRequest::default())
        .await
        .unwrap();
    assert_eq!(updated, seeded);
}

#[tokio::test]
async fn delete_returns_removed_entity_and_subsequent_find_fails() {
    let store = test_store();
    seed_user(
        &store,
        Some("ab12cd34"),
        "Usuário Teste",
        "emailteste@mail.com",
        "abcd1234",
    )
    .await;
    let service = UserService::new(store);

    let removed = service.delete("ab12cd34").await.unwrap();
    assert_eq!(removed.id.as_deref(), Some("ab12cd34"));

    let err = service.find_by_id("ab12cd34").await.unwrap_err();
    assert_eq!(err.to_string(), "Object not found. Id: ab12cd34 Type: User");
}

#[tokio::test]
async fn delete_unknown_id_fails_with_not_found() {
    let store = test_store();
    let service = UserService::new(store);

    let err = service.delete("ab12cd34e").await.unwrap_err();
    assert!(matches!(err, ApiUsersError::ObjectNotFound { .. }));
}
