//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management with a per-statement deadline
//! - Repository implementations for users and listings
//! - Schema migrations embedded from `infra/migrations`

pub mod connection;
pub mod postgres;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::{PgListingRepository, PgUserRepository};
