//! Unit tests for authentication service

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{AuthError, DomainError, ErrorKind, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, PasswordHasher};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::{BrokenPasswordHasher, CountingPasswordHasher, PlainPasswordHasher};

fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::default()).unwrap())
}

fn service_with<H: PasswordHasher>(
    repo: MockUserRepository,
    hasher: H,
) -> AuthService<MockUserRepository, H> {
    AuthService::new(
        Arc::new(repo),
        Arc::new(hasher),
        token_service(),
        AuthServiceConfig::default(),
    )
}

fn service() -> AuthService<MockUserRepository, PlainPasswordHasher> {
    service_with(MockUserRepository::new(), PlainPasswordHasher)
}

#[tokio::test]
async fn test_register_issues_verifiable_token() {
    let service = service();
    let tokens = token_service();

    let response = service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    assert_eq!(response.user.username, "alice");
    assert_eq!(response.user.email, "alice@example.com");
    assert_eq!(tokens.verify(&response.token).unwrap(), response.user.id);
}

#[tokio::test]
async fn test_register_stores_hash_not_password() {
    let repo = MockUserRepository::new();
    let service = service_with(repo.clone(), PlainPasswordHasher);

    service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    let stored = repo.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "hashed::secret123");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let service = service();
    service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    let second = service
        .register("alice2", "ALICE@example.com", "secret456")
        .await
        .unwrap_err();

    assert_eq!(second.kind(), ErrorKind::Conflict);
    assert!(matches!(
        second,
        DomainError::Auth(AuthError::UserAlreadyExists { ref field }) if field == "email"
    ));
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let service = service();
    service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    let second = service
        .register("alice", "other@example.com", "secret123")
        .await
        .unwrap_err();

    assert_eq!(second.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_register_validation() {
    let service = service();
    let long_password = "p".repeat(51);

    let cases = [
        ("", "alice@example.com", "secret123"),
        ("alice", "", "secret123"),
        ("alice", "not-an-email", "secret123"),
        ("alice", "alice@example.com", ""),
        ("alice", "alice@example.com", "short"),
        ("alice", "alice@example.com", long_password.as_str()),
    ];

    for (username, email, password) in cases {
        let error = service.register(username, email, password).await.unwrap_err();
        assert_eq!(
            error.kind(),
            ErrorKind::Validation,
            "expected validation failure for {:?}",
            (username, email, password.len())
        );
    }

    let invalid_email = service
        .register("alice", "alice@example", "secret123")
        .await
        .unwrap_err();
    assert!(matches!(
        invalid_email,
        DomainError::ValidationErr(ValidationError::InvalidEmail)
    ));
}

#[tokio::test]
async fn test_password_length_bounds_are_inclusive() {
    let service = service();

    assert!(service
        .register("six", "six@example.com", "123456")
        .await
        .is_ok());
    assert!(service
        .register("fifty", "fifty@example.com", &"p".repeat(50))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_login_success() {
    let service = service();
    let registered = service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    let response = service.login("Alice@Example.com", "secret123").await.unwrap();
    assert_eq!(response.user.id, registered.user.id);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let service = service();
    service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    let wrong_password = service
        .login("alice@example.com", "wrong-password")
        .await
        .unwrap_err();
    let unknown_email = service
        .login("nobody@example.com", "secret123")
        .await
        .unwrap_err();

    assert_eq!(wrong_password.kind(), ErrorKind::Unauthorized);
    assert_eq!(unknown_email.kind(), ErrorKind::Unauthorized);
    assert_eq!(wrong_password.public_message(), unknown_email.public_message());
    assert_eq!(wrong_password.public_message(), "Invalid email or password");
}

#[tokio::test]
async fn test_unknown_email_still_verifies_a_hash() {
    let hasher = Arc::new(CountingPasswordHasher::default());
    let service = AuthService::new(
        Arc::new(MockUserRepository::new()),
        Arc::clone(&hasher),
        token_service(),
        AuthServiceConfig::default(),
    );
    service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    service.login("alice@example.com", "wrong-password").await.unwrap_err();
    assert_eq!(hasher.verifications(), 1);

    let error = service.login("nobody@example.com", "secret123").await.unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(hasher.verifications(), 2);

    service.login("ghost@example.com", "secret123").await.unwrap_err();
    assert_eq!(hasher.verifications(), 3);
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let service = service();
    let error = service.login("", "secret123").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_hashing_failure_is_internal() {
    let service = service_with(MockUserRepository::new(), BrokenPasswordHasher);

    let error = service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.public_message(), "Internal server error");
}

#[tokio::test]
async fn test_store_failure_is_internal() {
    let service = service_with(MockUserRepository::failing(), PlainPasswordHasher);

    let error = service.login("alice@example.com", "secret123").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_current_user() {
    let service = service();
    let registered = service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    let profile = service.current_user(registered.user.id).await.unwrap();
    assert_eq!(profile, registered.user);

    let missing = service.current_user(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);
}
