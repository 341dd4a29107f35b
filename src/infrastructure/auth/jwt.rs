//! Bearer token issuance and verification (HS256 JWT)

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

use crate::domain::user::UserId;

/// Issuer written into every token
pub const TOKEN_ISSUER: &str = "chirpy";

/// Outcome of a failed issue or verify call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signing the claim set failed at the primitive level
    #[error("Failed to sign token: {0}")]
    Signing(String),

    /// Signature mismatch, wrong algorithm or malformed token
    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    /// Signature and expiry are fine but the subject is not a user ID
    #[error("Token subject is not a valid user ID")]
    InvalidSubject,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issuer
    pub iss: String,
    /// Issued at timestamp (Unix epoch seconds)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,
    /// Subject (user ID); parsed only after signature and expiry pass
    #[serde(default)]
    pub sub: String,
}

impl TokenClaims {
    /// Build claims for `subject`, issued at `issued_at` and valid for `lifetime`.
    ///
    /// A negative lifetime yields claims that are already expired.
    pub fn new(
        subject: &UserId,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .ok_or_else(|| TokenError::Signing("token lifetime out of range".to_string()))?;

        Ok(Self {
            iss: TOKEN_ISSUER.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            sub: subject.to_string(),
        })
    }

    /// An expiration at or before `now` counts as expired
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// Parse the subject claim into a user ID
    pub fn subject(&self) -> Result<UserId, TokenError> {
        UserId::parse(&self.sub).map_err(|_| TokenError::InvalidSubject)
    }
}

/// Issue a signed token for `subject` valid for `lifetime` from now
pub fn issue_token(subject: &UserId, secret: &[u8], lifetime: Duration) -> Result<String, TokenError> {
    issue_token_at(subject, secret, lifetime, Utc::now())
}

/// Issue a signed token as if the current time were `issued_at`
pub fn issue_token_at(
    subject: &UserId,
    secret: &[u8],
    lifetime: Duration,
    issued_at: DateTime<Utc>,
) -> Result<String, TokenError> {
    let claims = TokenClaims::new(subject, issued_at, lifetime)?;
    sign_claims(&claims, secret)
}

/// Sign an arbitrary claim set with HS256
pub fn sign_claims(claims: &TokenClaims, secret: &[u8]) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::Signing("secret must be non-empty".to_string()));
    }

    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify a token and return the user ID it was issued for
pub fn verify_token(token: &str, secret: &[u8]) -> Result<UserId, TokenError> {
    verify_token_at(token, secret, Utc::now())
}

/// Verify a token as if the current time were `now`.
///
/// Checks run in a fixed order: signature, then expiry, then subject shape.
pub fn verify_token_at(
    token: &str,
    secret: &[u8],
    now: DateTime<Utc>,
) -> Result<UserId, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::InvalidSignature);
    }

    // Expiry is checked below against `now` with no leeway.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp"]);

    let claims = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|_| TokenError::InvalidSignature)?
        .claims;

    if claims.is_expired_at(now) {
        return Err(TokenError::Expired);
    }

    claims.subject()
}

/// Configuration for JWT service
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing and verifying tokens
    pub secret: String,
    /// Default token lifetime
    pub token_lifetime: Duration,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, token_lifetime: Duration) -> Self {
        Self {
            secret: secret.into(),
            token_lifetime,
        }
    }
}

impl Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}

/// Trait for bearer token operations bound to a server secret
pub trait JwtGenerator: Send + Sync + Debug {
    /// Issue a token for a user with an explicit lifetime
    fn generate(&self, subject: &UserId, lifetime: Duration) -> Result<String, TokenError>;

    /// Validate a token and return its subject
    fn validate(&self, token: &str) -> Result<UserId, TokenError>;

    /// The configured default (and maximum) token lifetime
    fn token_lifetime(&self) -> Duration;
}

/// JWT service using a single shared secret
#[derive(Debug, Clone)]
pub struct JwtService {
    config: JwtConfig,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl JwtGenerator for JwtService {
    fn generate(&self, subject: &UserId, lifetime: Duration) -> Result<String, TokenError> {
        issue_token(subject, self.config.secret.as_bytes(), lifetime)
    }

    fn validate(&self, token: &str) -> Result<UserId, TokenError> {
        verify_token(token, self.config.secret.as_bytes())
    }

    fn token_lifetime(&self) -> Duration {
        self.config.token_lifetime
    }
}
