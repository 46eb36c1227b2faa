//! Main authentication service implementation

use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use sh_shared::validation::validators;

use crate::domain::entities::user::{User, UserProfile};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::PasswordHasher;

/// Hashed once and verified against when the email is unknown
const PLACEHOLDER_PASSWORD: &str = "placeholder-password-for-unknown-users";

/// Authentication service for registration and login
pub struct AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// User repository for credential storage
    user_repository: Arc<U>,
    /// One-way password hasher
    password_hasher: Arc<H>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
    /// Hash checked on unknown emails so they cost the same as a wrong password
    placeholder_hash: OnceCell<String>,
}

impl<U, H> AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `password_hasher` - One-way hasher for stored credentials
    /// * `token_service` - Service for JWT issuance
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
            config,
            placeholder_hash: OnceCell::new(),
        }
    }

    /// Register a new user and issue their first token
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token plus the new user's profile
    /// * `Err(DomainError::ValidationErr)` - A field is missing or malformed
    /// * `Err(DomainError::Auth(UserAlreadyExists))` - Email or username is taken
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        let username = username.trim();
        self.validate_registration(username, email, password)?;
        let email = User::normalize_email(email);

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::UserAlreadyExists {
                field: "email".to_string(),
            }
            .into());
        }
        if self.user_repository.exists_by_username(username).await? {
            return Err(AuthError::UserAlreadyExists {
                field: "username".to_string(),
            }
            .into());
        }

        let password_hash = self.password_hasher.hash(password).await?;
        // The store re-checks uniqueness; a concurrent registration surfaces here
        let user = self
            .user_repository
            .create(User::new(username.to_string(), email, password_hash))
            .await?;

        let token = self.token_service.issue(user.id)?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(AuthResponse::new(token, &user))
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a wrong password fail identically with
    /// `AuthError::InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        if !validators::not_empty(email) || password.is_empty() {
            return Err(DomainError::Validation {
                message: "Email and password are required".to_string(),
            });
        }

        let email = User::normalize_email(email);
        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("login attempt for unknown email");
                self.verify_placeholder(password).await;
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self
            .password_hasher
            .verify(password, &user.password_hash)
            .await?
        {
            tracing::debug!(user_id = %user.id, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(user.id)?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(AuthResponse::new(token, &user))
    }

    /// Profile of an authenticated user
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    async fn verify_placeholder(&self, password: &str) {
        let hash = self
            .placeholder_hash
            .get_or_try_init(|| self.password_hasher.hash(PLACEHOLDER_PASSWORD))
            .await;
        let outcome = match hash {
            Ok(hash) => self.password_hasher.verify(password, hash).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = outcome {
            tracing::warn!(error = %e, "placeholder password check failed");
        }
    }

    fn validate_registration(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ValidationError> {
        if username.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            });
        }
        if !validators::length_between(username, 1, self.config.max_username_length) {
            return Err(ValidationError::InvalidLength {
                field: "username".to_string(),
                min: 1,
                max: self.config.max_username_length,
            });
        }
        if !validators::not_empty(email) {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            });
        }
        if !validators::is_valid_email(email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            });
        }
        if !validators::length_between(
            password,
            self.config.min_password_length,
            self.config.max_password_length,
        ) {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: self.config.min_password_length,
                max: self.config.max_password_length,
            });
        }
        Ok(())
    }
}
