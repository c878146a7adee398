use std::sync::Arc;

use realmgate_core::AppError;
use realmgate_domain::{NewUser, UserUpdate};

use crate::fake_identity_provider::{FakeIdentityProvider, bearer};

use super::{UserService, UsersPort};

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_owned(),
        first_name: "Barbara".to_owned(),
        last_name: "Liskov".to_owned(),
        enabled: true,
        password: "substitution".to_owned(),
    }
}

fn service() -> (Arc<FakeIdentityProvider>, UserService) {
    let provider = Arc::new(FakeIdentityProvider::default());
    let service = UserService::new(provider.clone());
    (provider, service)
}

#[tokio::test]
async fn create_then_get_returns_matching_profile() {
    let (_, service) = service();

    let created = service
        .create_user(&bearer(), new_user("barbara@example.com"))
        .await
        .unwrap_or_else(|_| panic!("create user"));
    let fetched = service
        .get_user(&bearer(), created.id.as_str())
        .await
        .unwrap_or_else(|_| panic!("get user"));

    assert_eq!(fetched, created);
    assert_eq!(fetched.username, "barbara@example.com");
    assert_eq!(fetched.first_name, "Barbara");
    assert_eq!(fetched.last_name, "Liskov");
    assert!(fetched.enabled);
}

#[tokio::test]
async fn create_sends_username_as_email_and_password_separately() {
    let (provider, service) = service();

    let created = service
        .create_user(&bearer(), new_user("barbara@example.com"))
        .await;

    assert!(created.is_ok());
    let users = provider.users.lock().await.clone();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email.as_deref(), Some("barbara@example.com"));
    assert_eq!(
        provider.passwords.lock().await.get("user-1").map(String::as_str),
        Some("substitution")
    );
}

#[tokio::test]
async fn duplicate_username_conflicts_without_second_record() {
    let (provider, service) = service();

    let first = service
        .create_user(&bearer(), new_user("barbara@example.com"))
        .await;
    let second = service
        .create_user(&bearer(), new_user("barbara@example.com"))
        .await;

    assert!(first.is_ok());
    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(provider.users.lock().await.len(), 1);
}

#[tokio::test]
async fn missing_password_is_rejected_before_any_upstream_call() {
    let (provider, service) = service();
    let mut user = new_user("barbara@example.com");
    user.password = String::new();

    let result = service.create_user(&bearer(), user).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(provider.calls().await.is_empty());
}

#[tokio::test]
async fn disable_preserves_other_fields() {
    let (provider, service) = service();
    let created = service
        .create_user(&bearer(), new_user("barbara@example.com"))
        .await
        .unwrap_or_else(|_| panic!("create user"));

    let disabled = service.disable_user(&bearer(), created.id.as_str()).await;
    let fetched = service.get_user(&bearer(), created.id.as_str()).await;

    assert!(disabled.is_ok());
    let fetched = fetched.unwrap_or_else(|_| panic!("disabled users stay readable"));
    assert!(!fetched.enabled);
    assert_eq!(fetched.username, created.username);
    assert_eq!(fetched.first_name, created.first_name);
    assert_eq!(fetched.last_name, created.last_name);
    assert!(
        provider
            .calls()
            .await
            .ends_with(&["get_user".to_owned(), "update_user".to_owned(), "get_user".to_owned()])
    );
}

#[tokio::test]
async fn disable_unknown_user_is_not_found_without_write() {
    let (provider, service) = service();

    let result = service.disable_user(&bearer(), "missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(provider.updated_users.lock().await.is_empty());
}

#[tokio::test]
async fn list_filters_by_enabled_flag() {
    let (_, service) = service();
    let active = service
        .create_user(&bearer(), new_user("active@example.com"))
        .await
        .unwrap_or_else(|_| panic!("create user"));
    let inactive = service
        .create_user(&bearer(), new_user("inactive@example.com"))
        .await
        .unwrap_or_else(|_| panic!("create user"));
    assert!(
        service
            .disable_user(&bearer(), inactive.id.as_str())
            .await
            .is_ok()
    );

    let enabled = service.list_users(&bearer(), Some(true)).await;
    let all = service.list_users(&bearer(), None).await;

    assert!(matches!(enabled, Ok(users) if users.len() == 1 && users[0].id == active.id));
    assert!(matches!(all, Ok(users) if users.len() == 2));
}

#[tokio::test]
async fn update_replaces_profile_and_keeps_id() {
    let (provider, service) = service();
    let created = service
        .create_user(&bearer(), new_user("barbara@example.com"))
        .await
        .unwrap_or_else(|_| panic!("create user"));

    let result = service
        .update_user(
            &bearer(),
            created.id.as_str(),
            UserUpdate {
                username: "liskov@example.com".to_owned(),
                first_name: "B.".to_owned(),
                last_name: "Liskov".to_owned(),
                enabled: true,
            },
        )
        .await;

    assert!(result.is_ok());
    let written = provider.updated_users.lock().await.clone();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].id.as_deref(), Some(created.id.as_str()));
    assert_eq!(written[0].email.as_deref(), Some("liskov@example.com"));
}

#[tokio::test]
async fn update_password_requires_a_value() {
    let (provider, service) = service();

    let result = service.update_password(&bearer(), "user-1", " ").await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(provider.calls().await.is_empty());
}
