//! Type definitions module
//!
//! - `pagination` - Page arithmetic for list endpoints
//! - `response` - The response envelope and health checks

pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use pagination::{PaginatedResponse, Pagination};
pub use response::{ApiResponse, HealthResponse, HealthStatus, ResponseStatus, ServiceHealth};
