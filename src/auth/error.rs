//! Error taxonomy for the authentication flows.

use crate::auth::validate::{ValidationErrors, EMAIL_TAKEN};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing input fields, keyed by field name (422).
    #[error("validation failed")]
    Validation(ValidationErrors),
    /// Unknown email or wrong password; callers must not learn which (401).
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Store, hasher, or issuer failure (500).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique constraint on email rejected the write.
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            // A lost insert race reads the same as a failed uniqueness check.
            StoreError::DuplicateEmail => {
                Self::Validation(ValidationErrors::of("email", EMAIL_TAKEN))
            }
            StoreError::Other(err) => Self::Internal(err),
        }
    }
}
