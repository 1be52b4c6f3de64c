//! Registration and login flows over injected collaborators.

use crate::auth::{
    error::AuthError,
    password::PasswordHasher,
    store::{CredentialStore, User},
    token::TokenIssuer,
    validate::{
        validate_login, validate_register, LoginRequest, RegisterRequest, ValidationErrors,
        EMAIL_TAKEN,
    },
};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, info};

/// A successful registration or login: the user plus a fresh bearer token.
#[derive(Debug)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// The two authentication flows, wired to a store, a hasher, and an issuer.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    #[must_use]
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Register a new user and mint a token for the created account.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] on malformed input or a taken email;
    /// [`AuthError::Internal`] when a collaborator fails. Validation
    /// failures leave no side effects.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthSession, AuthError> {
        let new_user = validate_register(request).map_err(AuthError::Validation)?;

        // Taken emails fail before any hashing work; the store's unique
        // constraint still decides concurrent races on create below.
        if self.store.find_by_email(&new_user.email).await?.is_some() {
            return Err(AuthError::Validation(ValidationErrors::of(
                "email",
                EMAIL_TAKEN,
            )));
        }

        let password_hash = self.hasher.hash(new_user.password.expose_secret())?;

        let user = self
            .store
            .create(&new_user.name, &new_user.email, &password_hash)
            .await?;

        let token = self.tokens.issue(user.id).await?;

        info!("registered user {}", user.id);

        Ok(AuthSession { user, token })
    }

    /// Verify credentials and mint a token for the user.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] on malformed input;
    /// [`AuthError::InvalidCredentials`] for an unknown email or a wrong
    /// password, indistinguishably; [`AuthError::Internal`] when a
    /// collaborator fails. Stored state is never mutated besides the token.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, AuthError> {
        let attempt = validate_login(request).map_err(AuthError::Validation)?;

        let Some(user) = self.store.find_by_email(&attempt.email).await? else {
            debug!("login for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(attempt.password.expose_secret(), &user.password_hash)?
        {
            debug!("login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id).await?;

        info!("user {} logged in", user.id);

        Ok(AuthSession { user, token })
    }
}
