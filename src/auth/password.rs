//! Password hashing seam with the bcrypt implementation.

use anyhow::{Context, Result};

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Derive a hash suitable for storage.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying hash operation fails.
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Check a plaintext candidate against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored hash is malformed.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool>;
}

/// bcrypt-backed hasher.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Lower costs are for tests only; production wiring uses the default.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        bcrypt::hash(plaintext, self.cost).context("failed to hash password")
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(plaintext, hash).context("failed to verify password")
    }
}
