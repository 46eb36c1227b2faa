//! Shared utilities and common types for the SecondHand server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - The response envelope and pagination math
//! - Validation helpers (email, bounded lengths)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    PaginationConfig, ServerConfig,
};
pub use types::{ApiResponse, PaginatedResponse, Pagination, ResponseStatus};
pub use utils::validation;
