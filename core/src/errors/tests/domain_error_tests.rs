use crate::errors::*;

#[test]
fn test_kind_covers_wrapped_errors() {
    assert_eq!(DomainError::from(AuthError::InvalidCredentials).kind(), ErrorKind::Unauthorized);
    assert_eq!(
        DomainError::from(AuthError::UserAlreadyExists { field: "email".to_string() }).kind(),
        ErrorKind::Conflict
    );
    assert_eq!(DomainError::from(TokenError::TokenExpired).kind(), ErrorKind::Unauthorized);
    assert_eq!(DomainError::from(ValidationError::InvalidEmail).kind(), ErrorKind::Validation);
    assert_eq!(DomainError::from(AuthError::PasswordHashingFailed).kind(), ErrorKind::Internal);
}

#[test]
fn test_token_failures_share_one_message() {
    let expired = DomainError::from(TokenError::TokenExpired).public_message();
    let tampered = DomainError::from(TokenError::InvalidSignature).public_message();
    let malformed = DomainError::from(TokenError::InvalidTokenFormat).public_message();

    assert_eq!(expired, "Invalid or expired token");
    assert_eq!(expired, tampered);
    assert_eq!(expired, malformed);
}

#[test]
fn test_signing_failure_is_internal() {
    let error = DomainError::from(TokenError::TokenGenerationFailed);

    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.public_message(), "Internal server error");
}

#[test]
fn test_internal_detail_is_not_public() {
    let error = DomainError::internal("connection refused: 10.0.0.3:5432");

    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.public_message(), "Internal server error");
    assert!(error.to_string().contains("connection refused"));
}

#[test]
fn test_not_found_message_names_resource() {
    let error = DomainError::NotFound {
        resource: "Post".to_string(),
    };
    assert_eq!(error.public_message(), "Post not found");
}

#[test]
fn test_validation_messages() {
    let error = ValidationError::InvalidLength {
        field: "password".to_string(),
        min: 6,
        max: 50,
    };
    assert_eq!(error.to_string(), "password must be between 6 and 50 characters");
    assert_eq!(
        ValidationError::RequiredField { field: "title".to_string() }.to_string(),
        "title is required"
    );
}
