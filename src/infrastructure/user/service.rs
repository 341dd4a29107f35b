//! User service for registration and authentication

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{validate_email, validate_password, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::{CredentialError, PasswordHasher};

/// Request for registering a new user
#[derive(Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("password", &"[hidden]")
            .finish()
    }
}

/// User service for authentication and management
#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                request.email
            )));
        }

        let password_hash = self.hash(request.password).await?;
        let user = User::new(UserId::generate(), &request.email, password_hash);

        debug!(user_id = %user.id(), "Registering user");

        self.repository.create(user).await
    }

    /// Authenticate a user with email and password.
    ///
    /// Unknown emails and wrong passwords produce the same credential error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let Some(user) = self.repository.get_by_email(email).await? else {
            return Err(CredentialError::Mismatch.into());
        };

        self.verify(user.password_hash().to_string(), password.to_string())
            .await?;

        Ok(user)
    }

    /// Drop every registered user
    pub async fn clear(&self) -> Result<usize, DomainError> {
        self.repository.clear().await
    }

    // Argon2 is CPU-bound; keep it off the async workers.
    async fn hash(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(DomainError::from)
    }

    async fn verify(&self, hash: String, password: String) -> Result<(), DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.verify(&hash, &password))
            .await
            .map_err(|e| DomainError::internal(format!("Verification task failed: {}", e)))?
            .map_err(DomainError::from)
    }
}
