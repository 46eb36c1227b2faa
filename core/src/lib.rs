//! # Secondhand Market Core
//!
//! Domain layer for the secondhand marketplace backend: entities, business
//! services, repository interfaces and error types. Storage and transport
//! live in other crates and plug in through the repository traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
