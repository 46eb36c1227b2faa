//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types and utilities
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

/// The closed set of failure categories visible at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl DomainError {
    /// Classify this error into its boundary category
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => ErrorKind::Validation,
            DomainError::Token(TokenError::TokenGenerationFailed) => ErrorKind::Internal,
            DomainError::Unauthorized | DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::Forbidden { .. } => ErrorKind::Forbidden,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(err) => match err {
                AuthError::InvalidCredentials => ErrorKind::Unauthorized,
                AuthError::UserAlreadyExists { .. } => ErrorKind::Conflict,
                AuthError::UserNotFound => ErrorKind::NotFound,
                AuthError::PasswordHashingFailed => ErrorKind::Internal,
            },
        }
    }

    /// Message safe to show to a client; internal detail never leaks
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Validation { message } => message.clone(),
            DomainError::Unauthorized => "Unauthorized access".to_string(),
            DomainError::Forbidden { message } => message.clone(),
            DomainError::NotFound { resource } => format!("{} not found", resource),
            DomainError::Conflict { message } => message.clone(),
            DomainError::Internal { .. } => "Internal server error".to_string(),
            DomainError::Auth(AuthError::PasswordHashingFailed)
            | DomainError::Token(TokenError::TokenGenerationFailed) => "Internal server error".to_string(),
            DomainError::Auth(err) => err.to_string(),
            // Expired and tampered tokens read the same
            DomainError::Token(_) => "Invalid or expired token".to_string(),
            DomainError::ValidationErr(err) => err.to_string(),
        }
    }

    /// Shorthand for a store or infrastructure failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
