//! Authentication service module
//!
//! This module provides registration and login against the credential
//! store, issuing an identity token on success:
//! - Input validation (email shape, password length bounds)
//! - Uniqueness of email and username
//! - Password hashing through the `PasswordHasher` seam
//! - Uniform failure for unknown email and wrong password

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::PasswordHasher;
pub use service::AuthService;
