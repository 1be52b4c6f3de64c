//! Credential store seam: user records keyed by a globally unique email.

use crate::auth::error::StoreError;
use async_trait::async_trait;
use uuid::Uuid;

/// A persisted user record. The hash never leaves the service boundary;
/// response types serialize a reduced view.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Persistence seam for user records.
///
/// Implementations must enforce email uniqueness atomically at write time;
/// concurrent creates with the same email yield exactly one success and one
/// [`StoreError::DuplicateEmail`].
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exact-match lookup on the normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user record.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateEmail`] when the email is already registered.
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError>;
}
