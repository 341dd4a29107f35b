//! Authentication infrastructure module
//!
//! Password hashing with Argon2 and HS256 bearer tokens. Both halves are
//! synchronous and stateless; the only shared input is the server secret.

mod jwt;
mod password;

pub use jwt::{
    issue_token, issue_token_at, sign_claims, verify_token, verify_token_at, JwtConfig,
    JwtGenerator, JwtService, TokenClaims, TokenError, TOKEN_ISSUER,
};
pub use password::{hash_password, verify_password, Argon2Hasher, CredentialError, PasswordHasher};

use crate::domain::DomainError;

impl From<CredentialError> for DomainError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Hashing(message) => DomainError::internal(message),
            CredentialError::Mismatch => DomainError::credential("Incorrect email or password"),
        }
    }
}

impl From<TokenError> for DomainError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(message) => DomainError::internal(message),
            other => DomainError::credential(other.to_string()),
        }
    }
}
