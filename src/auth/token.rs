//! Token issuer seam and opaque token helpers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Mints opaque bearer tokens for authenticated sessions.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Mint a fresh token scoped to the user.
    ///
    /// # Errors
    ///
    /// Returns an error when the token cannot be generated or recorded.
    async fn issue(&self, user_id: Uuid) -> Result<String>;
}

/// Create a new bearer token.
/// The raw value is only returned to the client; storage keeps a hash.
pub(crate) fn generate_token() -> Result<String> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("failed to generate token")?;
    Ok(Base64UrlUnpadded::encode_string(&bytes))
}

/// Hash a token so raw values never touch the database.
pub(crate) fn hash_token(token: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}
