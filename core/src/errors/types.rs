//! Domain-specific error types for authentication, tokens and input validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Shared by unknown email and wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this {field} already exists")]
    UserAlreadyExists { field: String },

    #[error("User not found")]
    UserNotFound,

    #[error("Failed to hash password")]
    PasswordHashingFailed,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("At most {max} images are allowed")]
    TooManyImages { max: usize },
}
