//! Chirp service

use std::sync::Arc;

use crate::domain::chirp::{
    clean_chirp_body, validate_chirp_body, Chirp, ChirpId, ChirpRepository,
};
use crate::domain::user::UserId;
use crate::domain::DomainError;

#[derive(Debug, Clone)]
pub struct ChirpService {
    repository: Arc<dyn ChirpRepository>,
}

impl ChirpService {
    pub fn new(repository: Arc<dyn ChirpRepository>) -> Self {
        Self { repository }
    }

    /// Create a chirp authored by `author`, with banned words masked
    pub async fn create(&self, author: UserId, body: &str) -> Result<Chirp, DomainError> {
        validate_chirp_body(body).map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository
            .create(Chirp::new(ChirpId::generate(), author, clean_chirp_body(body)))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Chirp, DomainError> {
        let chirp_id = ChirpId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        self.repository
            .get(&chirp_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Chirp '{}' not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<Chirp>, DomainError> {
        self.repository.list().await
    }

    pub async fn clear(&self) -> Result<usize, DomainError> {
        self.repository.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::chirp::InMemoryChirpRepository;

    fn create_service() -> ChirpService {
        ChirpService::new(Arc::new(InMemoryChirpRepository::new()))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = create_service();
        let author = UserId::generate();

        let chirp = service.create(author, "Tread lightly.").await.unwrap();
        assert_eq!(chirp.user_id(), &author);

        let found = service.get(&chirp.id().to_string()).await.unwrap();
        assert_eq!(found.body(), "Tread lightly.");
    }

    #[tokio::test]
    async fn test_create_too_long() {
        let service = create_service();

        let result = service.create(UserId::generate(), &"a".repeat(141)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_invalid_and_missing() {
        let service = create_service();

        let result = service.get("not-a-uuid").await;
        assert!(matches!(result, Err(DomainError::InvalidId { .. })));

        let result = service.get(&ChirpId::generate().to_string()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_masks_banned_words() {
        let service = create_service();

        let chirp = service
            .create(UserId::generate(), "what a Kerfuffle this is")
            .await
            .unwrap();

        assert_eq!(chirp.body(), "what a **** this is");
        let stored = service.get(&chirp.id().to_string()).await.unwrap();
        assert_eq!(stored.body(), "what a **** this is");
    }

    #[tokio::test]
    async fn test_clear() {
        let service = create_service();
        service.create(UserId::generate(), "one").await.unwrap();

        assert_eq!(service.clear().await.unwrap(), 1);
        assert!(service.list().await.unwrap().is_empty());
    }
}
