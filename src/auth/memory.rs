//! In-memory store and issuer used by tests and local development.

use crate::auth::{
    error::StoreError,
    store::{CredentialStore, User},
    token::{generate_token, hash_token, TokenIssuer},
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

/// Mutex-guarded user list; the single lock makes the duplicate check and
/// the insert atomic, matching the database unique constraint.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: Mutex<Vec<User>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted users.
    ///
    /// # Panics
    ///
    /// Panics if the store mutex was poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.lock().expect("store mutex poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self
            .users
            .lock()
            .map_err(|_| StoreError::Other(anyhow!("store mutex poisoned")))?;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| StoreError::Other(anyhow!("store mutex poisoned")))?;

        if users.iter().any(|user| user.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());

        Ok(user)
    }
}

/// Issues opaque tokens and remembers their hashes per user.
#[derive(Debug, Default)]
pub struct MemoryTokenIssuer {
    issued: Mutex<Vec<(Uuid, Vec<u8>)>>,
}

impl MemoryTokenIssuer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens issued to the user.
    ///
    /// # Panics
    ///
    /// Panics if the issuer mutex was poisoned.
    #[must_use]
    pub fn issued_for(&self, user_id: Uuid) -> usize {
        self.issued
            .lock()
            .expect("issuer mutex poisoned")
            .iter()
            .filter(|(id, _)| *id == user_id)
            .count()
    }
}

#[async_trait]
impl TokenIssuer for MemoryTokenIssuer {
    async fn issue(&self, user_id: Uuid) -> Result<String> {
        let token = generate_token()?;
        let mut issued = self
            .issued
            .lock()
            .map_err(|_| anyhow!("issuer mutex poisoned"))?;
        issued.push((user_id, hash_token(&token)));
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_find_by_email() {
        let store = MemoryCredentialStore::new();
        let user = store
            .create("Ashutosh", "a@x.com", "$2b$04$hash")
            .await
            .unwrap();

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.name, "Ashutosh");

        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryCredentialStore::new();
        store.create("One", "a@x.com", "hash1").await.unwrap();

        let err = store.create("Two", "a@x.com", "hash2").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn issuer_records_tokens_per_user() {
        let issuer = MemoryTokenIssuer::new();
        let user_id = Uuid::new_v4();

        let first = issuer.issue(user_id).await.unwrap();
        let second = issuer.issue(user_id).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(issuer.issued_for(user_id), 2);
        assert_eq!(issuer.issued_for(Uuid::new_v4()), 0);
    }
}
