//! Tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError};
use crate::repositories::user_repository::mock::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::auth::AuthService;
use crate::services::token::{TokenService, TokenServiceConfig};

const PASSWORD: &str = "correct horse battery staple";

async fn fixture() -> (AuthService<MockUserRepository>, User) {
    let repository = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "auth-test-secret".to_string(),
        ..Default::default()
    }));

    let password_hash = bcrypt::hash(PASSWORD, 4).unwrap();
    let user = repository
        .create(User::new("sam@orderdesk.example", password_hash, "Sam Ops", UserRole::Staff).unwrap())
        .await
        .unwrap();

    (AuthService::new(repository, token_service), user)
}

#[tokio::test]
async fn test_authenticate_issues_token() {
    let (service, user) = fixture().await;

    let token = service
        .authenticate("sam@orderdesk.example", PASSWORD)
        .await
        .unwrap();

    assert_eq!(token.user_id, user.id);
    assert_eq!(token.token_type, "Bearer");
    assert!(token.expires_in > 0);
}

#[tokio::test]
async fn test_authenticate_unknown_email_fails() {
    let (service, _) = fixture().await;

    let result = service.authenticate("nobody@orderdesk.example", PASSWORD).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::AuthenticationFailed)
    ));
}

#[tokio::test]
async fn test_authenticate_wrong_password_fails() {
    let (service, _) = fixture().await;

    let result = service.authenticate("sam@orderdesk.example", "wrong").await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::AuthenticationFailed)
    ));
}

#[tokio::test]
async fn test_authenticate_disabled_account_fails() {
    let repository = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "auth-test-secret".to_string(),
        ..Default::default()
    }));

    let password_hash = bcrypt::hash(PASSWORD, 4).unwrap();
    let mut user =
        User::new("sam@orderdesk.example", password_hash, "Sam Ops", UserRole::Staff).unwrap();
    user.deactivate();
    repository.create(user).await.unwrap();

    let service = AuthService::new(repository, token_service);
    let result = service.authenticate("sam@orderdesk.example", PASSWORD).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::AccountDisabled)
    ));
}

#[tokio::test]
async fn test_validate_token_loads_user() {
    let (service, user) = fixture().await;

    let token = service
        .authenticate("sam@orderdesk.example", PASSWORD)
        .await
        .unwrap();
    let loaded = service.validate_token(&token.access_token).await.unwrap();

    assert_eq!(loaded.id, user.id);
    assert_eq!(loaded.email, "sam@orderdesk.example");
}

#[tokio::test]
async fn test_validate_token_rejects_tampered_token() {
    let (service, _) = fixture().await;

    let token = service
        .authenticate("sam@orderdesk.example", PASSWORD)
        .await
        .unwrap();
    let mut tampered = token.access_token;
    tampered.push('x');

    let result = service.validate_token(&tampered).await;
    assert!(matches!(result.unwrap_err(), DomainError::Token(_)));
}

#[tokio::test]
async fn test_validate_token_for_deleted_user_fails() {
    let repository = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "auth-test-secret".to_string(),
        ..Default::default()
    }));

    let password_hash = bcrypt::hash(PASSWORD, 4).unwrap();
    let user = repository
        .create(User::new("sam@orderdesk.example", password_hash, "Sam Ops", UserRole::Staff).unwrap())
        .await
        .unwrap();

    let service = AuthService::new(repository.clone(), token_service);
    let token = service
        .authenticate("sam@orderdesk.example", PASSWORD)
        .await
        .unwrap();

    repository.delete(user.id).await.unwrap();

    let result = service.validate_token(&token.access_token).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::AuthenticationFailed)
    ));
}
