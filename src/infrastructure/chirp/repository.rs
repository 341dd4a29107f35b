//! In-memory chirp repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::chirp::{Chirp, ChirpId, ChirpRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct ChirpStore {
    chirps: HashMap<ChirpId, Chirp>,
    /// Insertion order, used to break `created_at` ties
    order: Vec<ChirpId>,
}

#[derive(Debug, Default)]
pub struct InMemoryChirpRepository {
    store: RwLock<ChirpStore>,
}

impl InMemoryChirpRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChirpRepository for InMemoryChirpRepository {
    async fn get(&self, id: &ChirpId) -> Result<Option<Chirp>, DomainError> {
        let store = self.store.read().await;
        Ok(store.chirps.get(id).cloned())
    }

    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError> {
        let mut store = self.store.write().await;

        if store.chirps.contains_key(chirp.id()) {
            return Err(DomainError::conflict(format!(
                "Chirp with ID '{}' already exists",
                chirp.id()
            )));
        }

        store.order.push(*chirp.id());
        store.chirps.insert(*chirp.id(), chirp.clone());
        Ok(chirp)
    }

    async fn list(&self) -> Result<Vec<Chirp>, DomainError> {
        let store = self.store.read().await;
        let mut all: Vec<Chirp> = store
            .order
            .iter()
            .filter_map(|id| store.chirps.get(id))
            .cloned()
            .collect();

        // Stable sort keeps insertion order for equal timestamps
        all.sort_by_key(|c| c.created_at());
        Ok(all)
    }

    async fn clear(&self) -> Result<usize, DomainError> {
        let mut store = self.store.write().await;
        let removed = store.chirps.len();

        store.chirps.clear();
        store.order.clear();

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryChirpRepository::new();
        let chirp = Chirp::new(ChirpId::generate(), UserId::generate(), "Say my name.");
        let id = *chirp.id();

        repo.create(chirp).await.unwrap();

        let found = repo.get(&id).await.unwrap().unwrap();
        assert_eq!(found.body(), "Say my name.");
        assert!(repo.get(&ChirpId::generate()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let repo = InMemoryChirpRepository::new();
        let chirp = Chirp::new(ChirpId::generate(), UserId::generate(), "first");

        repo.create(chirp.clone()).await.unwrap();
        let result = repo.create(chirp).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_oldest_first() {
        let repo = InMemoryChirpRepository::new();
        let author = UserId::generate();

        for body in ["one", "two", "three"] {
            repo.create(Chirp::new(ChirpId::generate(), author, body))
                .await
                .unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let bodies: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|c| c.body().to_string())
            .collect();

        assert_eq!(bodies, vec!["one", "two", "three"]);
    }

    fn chirp_at(author: UserId, body: &str, created_at: &str) -> Chirp {
        serde_json::from_value(serde_json::json!({
            "id": ChirpId::generate(),
            "body": body,
            "user_id": author,
            "created_at": created_at,
            "updated_at": created_at,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_breaks_timestamp_ties_by_insertion() {
        let repo = InMemoryChirpRepository::new();
        let author = UserId::generate();
        let bodies = ["first", "second", "third", "fourth", "fifth"];

        for body in bodies {
            repo.create(chirp_at(author, body, "2024-01-01T00:00:00Z"))
                .await
                .unwrap();
        }

        for _ in 0..5 {
            let listed: Vec<String> = repo
                .list()
                .await
                .unwrap()
                .iter()
                .map(|c| c.body().to_string())
                .collect();

            assert_eq!(listed, bodies);
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_timestamp_before_insertion() {
        let repo = InMemoryChirpRepository::new();
        let author = UserId::generate();

        repo.create(chirp_at(author, "later", "2024-01-02T00:00:00Z"))
            .await
            .unwrap();
        repo.create(chirp_at(author, "earlier", "2024-01-01T00:00:00Z"))
            .await
            .unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].body(), "earlier");
        assert_eq!(listed[1].body(), "later");
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = InMemoryChirpRepository::new();
        let chirp = Chirp::new(ChirpId::generate(), UserId::generate(), "gone");
        let id = *chirp.id();
        repo.create(chirp).await.unwrap();

        assert_eq!(repo.clear().await.unwrap(), 1);
        assert!(repo.get(&id).await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
