//! PostgreSQL-specific database implementations
//!
//! This module contains PostgreSQL implementations of repository traits
//! using SQLx for database operations.

pub mod listing_repository_impl;
pub mod user_repository_impl;

// Re-export the PostgreSQL implementations
pub use listing_repository_impl::PgListingRepository;
pub use user_repository_impl::PgUserRepository;

use sh_core::errors::DomainError;

/// Log a driver failure and hide it behind an internal domain error
pub(crate) fn query_failed(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, error);
    DomainError::internal(format!("{}: {}", context, error))
}

/// Map a row decoding failure for `column`
pub(crate) fn column_failed(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Failed to get {}: {}", column, error))
}
