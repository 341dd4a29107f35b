//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::fmt::Debug;
use thiserror::Error;

/// Outcome of a failed hash or verify call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The hashing primitive itself failed. Never caused by password content.
    #[error("Failed to hash password: {0}")]
    Hashing(String),

    /// The candidate password does not match the stored hash, or the stored
    /// hash could not be understood.
    #[error("Password does not match")]
    Mismatch,
}

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password into a self-describing PHC string
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Verify a candidate password against a stored hash
    fn verify(&self, hash: &str, password: &str) -> Result<(), CredentialError>;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        hash_password(password)
    }

    fn verify(&self, hash: &str, password: &str) -> Result<(), CredentialError> {
        verify_password(hash, password)
    }
}

/// Hash a password with a fresh random salt.
///
/// Argon2id with default cost parameters; the parameters and salt are
/// embedded in the returned string so verification needs nothing else.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::Hashing(e.to_string()))
}

/// Verify a candidate password against a stored hash.
///
/// The digest comparison is constant-time. Malformed hashes and parameter
/// problems are reported as [`CredentialError::Mismatch`].
pub fn verify_password(hash: &str, password: &str) -> Result<(), CredentialError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| CredentialError::Mismatch)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| CredentialError::Mismatch)
}
