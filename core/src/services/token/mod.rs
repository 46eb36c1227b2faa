//! Token service module for JWT management
//!
//! Issues and verifies stateless identity tokens signed with a
//! process-wide symmetric secret. There is no refresh, rotation or
//! revocation: a token is valid until it expires.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
