//! Authentication core: validation, credential store, hashing, and tokens.
//!
//! The flows in [`service`] depend only on the seams defined in [`store`],
//! [`password`], and [`token`], so the HTTP layer and the storage backend
//! stay swappable. Production wiring uses PostgreSQL and bcrypt; tests use
//! the in-memory doubles from [`memory`].

pub mod error;
pub mod memory;
pub mod password;
pub mod postgres;
pub mod service;
pub mod store;
pub mod token;
pub mod validate;

pub use self::error::{AuthError, StoreError};
pub use self::service::{AuthService, AuthSession};
pub use self::store::{CredentialStore, User};
