//! Configuration for the token service

use jsonwebtoken::Algorithm;
use sh_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_ISSUER, TOKEN_EXPIRY_HOURS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (symmetric only)
    pub algorithm: Algorithm,
    /// Token lifetime in hours
    pub token_expiry_hours: i64,
    /// Issuer written to and required from every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_hours: TOKEN_EXPIRY_HOURS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            token_expiry_hours: config.expiry_hours,
            issuer: config.issuer.clone(),
        }
    }
}
