//! # Infrastructure Layer
//!
//! Concrete implementations of the repository and hashing seams declared in
//! `sh_core`:
//! - **Database**: PostgreSQL repositories and pool management using SQLx
//! - **Security**: bcrypt password hashing

// Re-export core types for convenience
pub use sh_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Security module - password hashing
pub mod security;

/// Configuration module for infrastructure services
pub mod config {
    //! Infrastructure configuration, loaded through the shared config layer

    pub use sh_shared::config::DatabaseConfig;

    /// Infrastructure configuration settings
    #[derive(Debug, Clone)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
        /// bcrypt work factor
        pub bcrypt_cost: u32,
    }
}

use database::{DatabasePool, PgListingRepository, PgUserRepository};
use security::BcryptPasswordHasher;

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    pub pool: DatabasePool,
    pub user_repository: PgUserRepository,
    pub listing_repository: PgListingRepository,
    pub password_hasher: BcryptPasswordHasher,
}

impl InfrastructureServices {
    /// Connect the pool, apply migrations and build the repositories
    ///
    /// Configuration is injected; loading `.env` files is the binary's job.
    pub async fn connect(config: config::InfrastructureConfig) -> Result<Self, InfrastructureError> {
        tracing::info!("Initializing infrastructure services...");

        let pool = DatabasePool::new(config.database).await?;
        pool.run_migrations().await?;

        tracing::info!("Infrastructure services initialized successfully");

        Ok(Self {
            user_repository: PgUserRepository::new(pool.get_pool().clone()),
            listing_repository: PgListingRepository::new(pool.get_pool().clone()),
            password_hasher: BcryptPasswordHasher::new(config.bcrypt_cost),
            pool,
        })
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
