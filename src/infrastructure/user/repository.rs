//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Users and the email lookup live under one lock so they never disagree
#[derive(Debug, Default)]
struct UserStore {
    users: HashMap<UserId, User>,
    by_email: HashMap<String, UserId>,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;

        Ok(store
            .by_email
            .get(email)
            .and_then(|id| store.users.get(id))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        if store.users.contains_key(user.id()) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                user.id()
            )));
        }

        if store.by_email.contains_key(user.email()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                user.email()
            )));
        }

        store.by_email.insert(user.email().to_string(), *user.id());
        store.users.insert(*user.id(), user.clone());

        Ok(user)
    }

    async fn clear(&self) -> Result<usize, DomainError> {
        let mut store = self.store.write().await;
        let removed = store.users.len();

        store.users.clear();
        store.by_email.clear();

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn create_test_user(email: &str) -> User {
        User::new(UserId::generate(), email, "hashed_password")
    }

    #[tokio::test]
    async fn test_create_and_get_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("walt@breakingbad.com");
        let id = *user.id();

        repo.create(user).await.unwrap();

        let found = repo.get_by_email("walt@breakingbad.com").await.unwrap().unwrap();
        assert_eq!(found.id(), &id);

        let missing = repo.get_by_email("jesse@breakingbad.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("walt@breakingbad.com"))
            .await
            .unwrap();

        let result = repo.create(create_test_user("walt@breakingbad.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert!(repo.email_exists("walt@breakingbad.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("a@example.com")).await.unwrap();
        repo.create(create_test_user("b@example.com")).await.unwrap();

        assert_eq!(repo.clear().await.unwrap(), 2);
        assert!(!repo.email_exists("a@example.com").await.unwrap());

        // The email is free again once cleared
        repo.create(create_test_user("a@example.com")).await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_lookups_and_inserts_complete() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.create(create_test_user("walt@breakingbad.com"))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for i in 0..200 {
            let reader = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                reader.get_by_email("walt@breakingbad.com").await.unwrap();
            }));

            let writer = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                writer
                    .create(create_test_user(&format!("user{}@example.com", i)))
                    .await
                    .unwrap();
            }));
        }

        let all = async {
            for handle in handles {
                handle.await.unwrap();
            }
        };

        tokio::time::timeout(std::time::Duration::from_secs(20), all)
            .await
            .expect("concurrent lookups and inserts did not complete");

        assert!(repo.email_exists("user199@example.com").await.unwrap());
    }
}
